//! Data model shared between the stack verifier and its failure reports.
//!
//! Everything here is an immutable value: snapshots are copied out of the verifier's
//! working state at capture time and never alias it.

pub mod result;
pub mod stack;
pub mod types;

pub use result::{SlotOutOfBounds, VerificationResult};
pub use stack::StackSnapshot;
pub use types::{EmptyTypeName, TypeDescriptor};
