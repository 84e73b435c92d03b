use repr::{StackSnapshot, VerificationResult};

use super::VerificationError;

impl VerificationError {
    /// Render message together with every captured stack and instruction listing.
    ///
    /// Stacks are listed slot by slot starting from the top.
    /// This is meant for debugging and its layout is not stable.
    ///
    /// # Panics
    ///
    /// Panics if no stacks were captured, check [`has_debug_info`](Self::has_debug_info) first.
    pub fn debug_dump(&self) -> String {
        assert!(
            self.has_debug_info(),
            "verification error `{}` has no captured stacks to dump",
            self.message
        );

        let mut r = String::new();
        // Writing into `String` never fails.
        let _ = self.emit_debug_dump(&mut r);
        r
    }

    pub(super) fn emit_debug_dump(
        &self,
        writer: &mut impl std::fmt::Write,
    ) -> Result<(), std::fmt::Error> {
        writeln!(writer, "{}", self.message)?;

        for (heading, stack) in self.headed_stacks() {
            writeln!(writer)?;
            writeln!(writer, "{heading}:")?;
            stack.emit_pretty(writer)?;
        }

        if !self.instructions.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "instructions:")?;

            for (i, instr) in self.instructions.iter().enumerate() {
                writeln!(writer, "{i:>5}: {instr}")?;
            }
        }

        Ok(())
    }

    pub(super) fn headed_stacks(&self) -> impl Iterator<Item = (String, &StackSnapshot)> {
        let is_mismatch = matches!(
            self.failure,
            Some(VerificationResult::StackMismatch { .. })
        );
        let single = self.stacks.len() == 1;

        self.stacks.iter().enumerate().map(move |(i, stack)| {
            let heading = match i {
                0 if is_mismatch => "stack at branch".to_string(),
                1 if is_mismatch => "stack at destination".to_string(),
                _ if single => "stack".to_string(),
                i => format!("stack #{i}"),
            };

            (heading, stack)
        })
    }
}
