mod diagnostic;
mod dump;
mod failure;

use codespan_reporting::diagnostic::Diagnostic as Message;
use std::error::Error;
use std::fmt::Display;

use repr::{StackSnapshot, VerificationResult};

use crate::render::render;

pub use diagnostic::Diagnostic;

/// Verification failure surfaced to whoever emits instructions.
///
/// Error keeps a short rendered message for the common path.
/// Captured stacks (and optionally the listing of emitted instructions)
/// are only rendered on request, see [`debug_dump`](Self::debug_dump).
///
/// Formatting with `{}` produces the message alone,
/// alternate form `{:#}` appends the debug dump whenever there is one.
#[derive(Debug, Clone)]
pub struct VerificationError {
    message: String,
    failure: Option<VerificationResult>,
    stacks: Vec<StackSnapshot>,
    instructions: Vec<String>,
}

impl VerificationError {
    /// Explain why instruction `label` failed verification.
    ///
    /// # Panics
    ///
    /// Panics if `failure` is [`VerificationResult::Success`]
    /// or if it is [`VerificationResult::TypeMismatch`] whose index lies outside of its stack,
    /// see [`render`](crate::render::render).
    pub fn new(label: &str, failure: VerificationResult) -> Self {
        let message = render(label, &failure);
        let stacks = failure.stacks().into_iter().cloned().collect();

        tracing::trace!(label, kind = failure.kind(), %message, "constructed verification error");

        VerificationError {
            message,
            failure: Some(failure),
            stacks,
            instructions: Vec::new(),
        }
    }

    /// Construct error out of custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();

        tracing::trace!(%message, "constructed verification error");

        VerificationError {
            message,
            failure: None,
            stacks: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Attach more stacks to the debug dump.
    pub fn with_stacks(mut self, stacks: impl IntoIterator<Item = StackSnapshot>) -> Self {
        self.stacks.extend(stacks);
        self
    }

    /// Attach listing of instructions emitted up to the failure.
    pub fn with_instructions(
        mut self,
        instructions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.instructions
            .extend(instructions.into_iter().map(Into::into));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failure this error was rendered from.
    ///
    /// Returns `None` for errors constructed via [`with_message`](Self::with_message).
    pub fn failure(&self) -> Option<&VerificationResult> {
        self.failure.as_ref()
    }

    pub fn stacks(&self) -> &[StackSnapshot] {
        &self.stacks
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Whether [`debug_dump`](Self::debug_dump) can be called.
    pub fn has_debug_info(&self) -> bool {
        !self.stacks.is_empty()
    }

    /// Produce rich diagnostic with notes about the failure and captured stacks.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut message = Message::error().with_message(self.message.clone());

        if let Some(failure) = &self.failure {
            failure::explain(&mut message, failure);
        }

        for (heading, stack) in self.headed_stacks() {
            message.with_stack(&heading, stack);
        }

        Diagnostic::with_message(message)
    }
}

impl Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() && self.has_debug_info() {
            self.emit_debug_dump(f)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl Error for VerificationError {}

trait ExtraDiagnostic {
    fn with_note(&mut self, iter: impl IntoIterator<Item = impl AsRef<str>>);
    fn with_help(&mut self, iter: impl IntoIterator<Item = impl AsRef<str>>);
    fn with_stack(&mut self, heading: &str, stack: &StackSnapshot);
}

impl<FileId> ExtraDiagnostic for Message<FileId> {
    fn with_note(&mut self, iter: impl IntoIterator<Item = impl AsRef<str>>) {
        self.notes
            .extend(iter.into_iter().map(|s| format!("note: {}", s.as_ref())));
    }

    fn with_help(&mut self, iter: impl IntoIterator<Item = impl AsRef<str>>) {
        self.notes
            .extend(iter.into_iter().map(|s| format!("help: {}", s.as_ref())));
    }

    fn with_stack(&mut self, heading: &str, stack: &StackSnapshot) {
        let pretty = stack.to_pretty_string();

        self.notes.push(format!("{heading}:\n{}", pretty.trim_end()));
    }
}
