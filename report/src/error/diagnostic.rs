use codespan_reporting::term::termcolor::WriteColor;

pub use codespan_reporting::diagnostic::Diagnostic as Message;
pub use codespan_reporting::files::{Error, SimpleFile};
pub use codespan_reporting::term::Config;

/// Rich rendering of a verification error.
///
/// Verification failures are not tied to any source text,
/// so the diagnostic carries an empty file and no labels.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub files: SimpleFile<String, String>,
    pub message: Message<()>,
}

impl Diagnostic {
    pub fn with_message(message: Message<()>) -> Self {
        Diagnostic {
            files: SimpleFile::new("".into(), "".into()),
            message,
        }
    }

    pub fn emit(&self, writer: &mut dyn WriteColor, config: &Config) -> Result<(), Error> {
        use codespan_reporting::term::emit;

        emit(writer, config, &self.files, &self.message)
    }

    pub fn emit_to_string(&self) -> String {
        use codespan_reporting::term::termcolor::NoColor;

        let mut s = Vec::new();
        // Writing into `Vec` never fails and there are no labels to look up in `files`.
        let _ = self.emit(&mut NoColor::new(&mut s), &Default::default());
        String::from_utf8_lossy(&s).to_string()
    }
}

#[cfg(test)]
mod tests {
    use repr::{StackSnapshot, TypeDescriptor, VerificationResult};

    use crate::error::VerificationError;

    #[test]
    fn emits_message_and_notes() {
        let failure = VerificationResult::StackSizeFailure {
            expected_count: 1,
            stack: StackSnapshot::from_top_down([TypeDescriptor::INT32, TypeDescriptor::INT32]),
        };
        let text = VerificationError::new("Ret", failure)
            .to_diagnostic()
            .emit_to_string();

        assert!(text.starts_with("error: Ret expected the stack to have 1 value"));
        assert!(text.contains("instruction requires exactly 1 value(s) on the stack"));
        assert!(text.contains("[ 1] Int32"));
    }

    #[test]
    fn emit_to_string_renders_without_labels() {
        let text = VerificationError::with_message("custom")
            .to_diagnostic()
            .emit_to_string();

        assert_eq!(text.trim_end(), "error: custom");
    }

    #[test]
    fn custom_message_has_no_notes() {
        let diag = VerificationError::with_message("custom").to_diagnostic();

        assert_eq!(diag.message.message, "custom");
        assert!(diag.message.notes.is_empty());
    }
}
