use codespan_reporting::diagnostic::Diagnostic;
use repr::{StackSnapshot, TypeDescriptor, VerificationResult};

use super::ExtraDiagnostic;

pub(super) fn explain<FileId>(diag: &mut Diagnostic<FileId>, failure: &VerificationResult) {
    use VerificationResult::*;

    match failure {
        Success => unreachable!("successful results never produce verification errors"),
        StackUnderflow {
            expected_count,
            stack,
        } => {
            diag.with_note([format!(
                "instruction takes {expected_count} operand(s) from the top of the stack, but the stack holds {} value(s)",
                stack.len()
            )]);
            diag.with_help([
                "missing operands must be pushed by instructions emitted before this one",
            ]);
        }
        TypeMismatch {
            expected,
            stack,
            index,
        } => {
            let found = &stack[*index];

            diag.with_note([
                format!("slot {index} (counting from the top of the stack) holds `{found}`"),
                format!("instruction requires `{expected}` in this slot"),
            ]);
        }
        StackMismatch { stack_a, stack_b } => {
            match Divergence::find(stack_a, stack_b) {
                Divergence::Height => diag.with_note([format!(
                    "stack at branch holds {} value(s), but stack at destination holds {} value(s)",
                    stack_a.len(),
                    stack_b.len()
                )]),
                Divergence::Slot(i, a, b) => diag.with_note([format!(
                    "stacks first diverge at slot {i}: `{a}` at branch, `{b}` at destination"
                )]),
                Divergence::None => diag.with_note([
                    "stacks list identical types, verifier must have rejected them for another reason",
                ]),
            }

            diag.with_help([
                "every path into destination must leave stack of the same height holding the same types",
            ]);
        }
        StackSizeFailure {
            expected_count,
            stack,
        } => {
            diag.with_note([format!(
                "instruction requires exactly {expected_count} value(s) on the stack, but the stack holds {}",
                stack.len()
            )]);
        }
    }
}

/// First observable difference between two stacks, looking from the top.
#[derive(Debug, PartialEq, Eq)]
enum Divergence<'a> {
    None,
    Height,
    Slot(usize, &'a TypeDescriptor, &'a TypeDescriptor),
}

impl<'a> Divergence<'a> {
    fn find(lhs: &'a StackSnapshot, rhs: &'a StackSnapshot) -> Self {
        let slot = lhs
            .iter()
            .zip(rhs.iter())
            .enumerate()
            .find(|(_, (a, b))| a != b);

        match slot {
            Some((i, (a, b))) => Divergence::Slot(i, a, b),
            None if lhs.len() != rhs.len() => Divergence::Height,
            None => Divergence::None,
        }
    }
}
