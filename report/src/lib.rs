//! Human-readable explanations of stack verification failures.
//!
//! [`render`] turns a failed [`VerificationResult`] into a one-line message,
//! [`VerificationError`] carries that message together with the captured stacks
//! for on-demand [debug dumps](VerificationError::debug_dump) and
//! [rich diagnostics](VerificationError::to_diagnostic).

pub mod error;
pub mod render;

pub use error::{Diagnostic, VerificationError};
pub use render::{indefinite_article, render, Explain};
pub use repr::{StackSnapshot, TypeDescriptor, VerificationResult};
