use proptest::prelude::*;
use report::{render, StackSnapshot, TypeDescriptor, VerificationError, VerificationResult};

fn underflow(expected_count: usize) -> VerificationResult {
    VerificationResult::StackUnderflow {
        expected_count,
        stack: StackSnapshot::empty(),
    }
}

fn size_failure(expected_count: usize) -> VerificationResult {
    VerificationResult::StackSizeFailure {
        expected_count,
        stack: StackSnapshot::empty(),
    }
}

proptest! {
    #[test]
    fn underflow_embeds_count(count in 2usize..100_000, label in "[A-Za-z][A-Za-z0-9._]{0,12}") {
        let message = render(&label, &underflow(count));

        prop_assert_eq!(message, format!("{label} expects {count} values on the stack"));
    }

    #[test]
    fn size_failure_embeds_count(count in 2usize..100_000, label in "[A-Za-z][A-Za-z0-9._]{0,12}") {
        let message = render(&label, &size_failure(count));

        prop_assert_eq!(message, format!("{label} expected the stack to have {count} values"));
    }

    #[test]
    fn article_follows_first_letter(name in "[A-Za-z][A-Za-z0-9]{0,12}") {
        let stack = StackSnapshot::from_top_down([TypeDescriptor::OBJECT]);
        let expected = TypeDescriptor::new(name.clone()).unwrap();
        let failure = VerificationResult::type_mismatch(expected, stack, 0).unwrap();

        let article = if "aeiouAEIOU".contains(&name[..1]) { "an" } else { "a" };

        prop_assert_eq!(
            render("Op", &failure),
            format!("Op expected {article} {name}; found Object")
        );
    }
}

#[test]
fn label_is_separated_from_size_failure() {
    let message = render("Ret", &size_failure(1));

    assert_eq!(message, "Ret expected the stack to have 1 value");
    assert!(!message.contains("Retexpected"));
}

#[test]
fn error_surfaces_to_emitter() {
    fn emit_add(stack: &[TypeDescriptor]) -> Result<(), VerificationError> {
        if stack.len() < 2 {
            let failure = VerificationResult::StackUnderflow {
                expected_count: 2,
                stack: StackSnapshot::capture(stack),
            };
            return Err(VerificationError::new("Add", failure));
        }

        Ok(())
    }

    let err = emit_add(&[TypeDescriptor::INT32]).unwrap_err();

    assert_eq!(err.to_string(), "Add expects 2 values on the stack");
    assert_eq!(err.stacks(), &[StackSnapshot::from_top_down([TypeDescriptor::INT32])]);
    assert!(emit_add(&[TypeDescriptor::INT32, TypeDescriptor::INT32]).is_ok());
}

#[test]
fn stack_mismatch_details_only_in_dump() {
    let failure = VerificationResult::StackMismatch {
        stack_a: StackSnapshot::from_top_down([TypeDescriptor::UNMANAGED_POINTER]),
        stack_b: StackSnapshot::from_top_down([TypeDescriptor::MANAGED_POINTER]),
    };
    let err = VerificationError::new("Beq", failure);

    assert!(!err.message().contains("Pointer"));
    assert!(err.debug_dump().contains("[ 0] UnmanagedPointer"));
    assert!(err.debug_dump().contains("[ 0] ManagedPointer"));
}
