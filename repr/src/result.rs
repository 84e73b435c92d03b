use thiserror::Error;

use crate::stack::StackSnapshot;
use crate::types::TypeDescriptor;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("slot {index} is out of bounds for stack of {len} value(s)")]
pub struct SlotOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// Outcome of a single verifier check performed at one instruction.
///
/// Stack indices follow [`StackSnapshot`] convention: `0` is the top of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Success,
    /// Instruction needs more operands than the stack holds.
    StackUnderflow {
        expected_count: usize,
        stack: StackSnapshot,
    },
    /// Slot `index` of `stack` holds a value incompatible with `expected`.
    TypeMismatch {
        expected: TypeDescriptor,
        stack: StackSnapshot,
        index: usize,
    },
    /// Stack at a branch is incompatible with stack already recorded at its destination.
    StackMismatch {
        stack_a: StackSnapshot,
        stack_b: StackSnapshot,
    },
    /// Instruction requires stack to be of exact size.
    StackSizeFailure {
        expected_count: usize,
        stack: StackSnapshot,
    },
}

impl VerificationResult {
    /// Construct type mismatch, making sure `index` points into `stack`.
    pub fn type_mismatch(
        expected: TypeDescriptor,
        stack: StackSnapshot,
        index: usize,
    ) -> Result<Self, SlotOutOfBounds> {
        if index >= stack.len() {
            return Err(SlotOutOfBounds {
                index,
                len: stack.len(),
            });
        }

        Ok(VerificationResult::TypeMismatch {
            expected,
            stack,
            index,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VerificationResult::Success)
    }

    pub fn kind(&self) -> &'static str {
        use VerificationResult::*;

        match self {
            Success => "success",
            StackUnderflow { .. } => "stack underflow",
            TypeMismatch { .. } => "type mismatch",
            StackMismatch { .. } => "stack mismatch",
            StackSizeFailure { .. } => "stack size failure",
        }
    }

    /// Snapshots referenced by the result in declaration order.
    pub fn stacks(&self) -> Vec<&StackSnapshot> {
        use VerificationResult::*;

        match self {
            Success => Vec::new(),
            StackUnderflow { stack, .. }
            | TypeMismatch { stack, .. }
            | StackSizeFailure { stack, .. } => vec![stack],
            StackMismatch { stack_a, stack_b } => vec![stack_a, stack_b],
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        match self {
            VerificationResult::Success => Ok(()),
            failure => Err(failure),
        }
    }
}
