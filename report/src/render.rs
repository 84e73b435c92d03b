use std::fmt::Display;

use repr::VerificationResult;

/// Pick indefinite article for `word`.
///
/// This is orthographic rather than phonetic check:
/// any word starting with ASCII vowel letter gets "an", so "union" produces "an union".
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Render explanation for why instruction `label` failed verification.
///
/// # Panics
///
/// Panics when `result` is [`VerificationResult::Success`]
/// or when [`VerificationResult::TypeMismatch`] refers to slot outside of its stack.
/// Both indicate a bug in the caller.
pub fn render(label: &str, result: &VerificationResult) -> String {
    Explain::new(label, result).to_string()
}

/// [`Display`] adapter producing the same text as [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Explain<'a> {
    label: &'a str,
    result: &'a VerificationResult,
}

impl<'a> Explain<'a> {
    /// # Panics
    ///
    /// Same conditions as [`render`].
    pub fn new(label: &'a str, result: &'a VerificationResult) -> Self {
        match result {
            VerificationResult::Success => {
                panic!("attempted to explain successful verification of `{label}`")
            }
            VerificationResult::TypeMismatch { stack, index, .. } if *index >= stack.len() => {
                panic!(
                    "type mismatch for `{label}` refers to slot {index}, but captured stack holds only {} value(s)",
                    stack.len()
                )
            }
            _ => (),
        }

        Explain { label, result }
    }
}

impl<'a> Display for Explain<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use VerificationResult::*;

        let Explain { label, result } = *self;

        match result {
            Success => unreachable!("successful results are rejected on construction"),
            StackUnderflow {
                expected_count: 1,
                ..
            } => write!(f, "{label} expects a value on the stack, but it was empty"),
            StackUnderflow { expected_count, .. } => {
                write!(f, "{label} expects {expected_count} values on the stack")
            }
            TypeMismatch {
                expected,
                stack,
                index,
            } => {
                let expected = expected.name();
                let found = &stack[*index];
                let article = indefinite_article(expected);

                write!(f, "{label} expected {article} {expected}; found {found}")
            }
            StackMismatch { .. } => write!(f, "{label} stack doesn't match destination"),
            StackSizeFailure {
                expected_count: 0,
                ..
            } => write!(f, "{label} expected the stack to be empty"),
            StackSizeFailure {
                expected_count: 1,
                ..
            } => write!(f, "{label} expected the stack to have 1 value"),
            StackSizeFailure { expected_count, .. } => {
                write!(f, "{label} expected the stack to have {expected_count} values")
            }
        }
    }
}
