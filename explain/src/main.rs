use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use repr::{StackSnapshot, TypeDescriptor, VerificationResult};
use report::VerificationError;

/// Explain stack verification failure the same way instruction emitter would report it.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    trace: bool,
    /// Print captured stacks after the message.
    #[arg(long)]
    dump: bool,
    /// Print rich diagnostic instead of plain message.
    #[arg(long, conflicts_with = "dump")]
    diagnostic: bool,
    #[arg(long)]
    color: bool,
    #[clap(subcommand)]
    command: Command,
}

/// Stacks are listed top first as comma-separated type names.
#[derive(Debug, Subcommand)]
enum Command {
    Underflow {
        label: String,
        #[arg(long)]
        expected: usize,
        #[arg(long, value_delimiter = ',')]
        stack: Vec<String>,
    },
    TypeMismatch {
        label: String,
        #[arg(long)]
        expected: String,
        #[arg(long)]
        index: usize,
        #[arg(long, value_delimiter = ',', required = true)]
        stack: Vec<String>,
    },
    StackMismatch {
        label: String,
        #[arg(long, value_delimiter = ',')]
        stack: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        destination: Vec<String>,
    },
    StackSize {
        label: String,
        #[arg(long)]
        expected: usize,
        #[arg(long, value_delimiter = ',')]
        stack: Vec<String>,
    },
}

fn parse_type(name: String) -> Result<TypeDescriptor> {
    TypeDescriptor::new(name).context("invalid type name")
}

fn parse_stack(names: Vec<String>) -> Result<StackSnapshot> {
    let slots = names
        .into_iter()
        .map(parse_type)
        .collect::<Result<Vec<_>>>()?;

    Ok(StackSnapshot::from_top_down(slots))
}

impl Command {
    fn into_failure(self) -> Result<(String, VerificationResult)> {
        let r = match self {
            Command::Underflow {
                label,
                expected,
                stack,
            } => (
                label,
                VerificationResult::StackUnderflow {
                    expected_count: expected,
                    stack: parse_stack(stack)?,
                },
            ),
            Command::TypeMismatch {
                label,
                expected,
                index,
                stack,
            } => {
                let expected = parse_type(expected)?;
                let stack = parse_stack(stack)?;
                let failure = VerificationResult::type_mismatch(expected, stack, index)?;

                (label, failure)
            }
            Command::StackMismatch {
                label,
                stack,
                destination,
            } => (
                label,
                VerificationResult::StackMismatch {
                    stack_a: parse_stack(stack)?,
                    stack_b: parse_stack(destination)?,
                },
            ),
            Command::StackSize {
                label,
                expected,
                stack,
            } => (
                label,
                VerificationResult::StackSizeFailure {
                    expected_count: expected,
                    stack: parse_stack(stack)?,
                },
            ),
        };

        Ok(r)
    }
}

fn main() -> Result<()> {
    let Cli {
        trace,
        dump,
        diagnostic,
        color,
        command,
    } = Cli::parse();

    if trace {
        let logger = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(logger)?;
    }

    let (label, failure) = command.into_failure()?;
    let err = VerificationError::new(&label, failure);

    if diagnostic {
        use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

        let choice = if color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let writer = StandardStream::stdout(choice);

        err.to_diagnostic()
            .emit(&mut writer.lock(), &Default::default())?;
    } else if dump {
        print!("{}", err.debug_dump());
    } else {
        println!("{err}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repr::{EmptyTypeName, SlotOutOfBounds};

    fn failure(args: &[&str]) -> Result<(String, VerificationResult)> {
        let args = std::iter::once("explain").chain(args.iter().copied());
        let cli = Cli::try_parse_from(args)?;

        cli.command.into_failure()
    }

    #[test]
    fn stack_is_listed_top_first() {
        let args = ["underflow", "Add", "--expected", "3", "--stack", "A,B"];
        let (label, failure) = failure(&args).unwrap();

        let VerificationResult::StackUnderflow { stack, .. } = &failure else {
            panic!("expected stack underflow, got {failure:?}")
        };

        assert_eq!(label, "Add");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack[0].name(), "A");
        assert_eq!(stack[1].name(), "B");
    }

    #[test]
    fn index_outside_stack_is_rejected() {
        let err = failure(&[
            "type-mismatch",
            "Add",
            "--expected",
            "Int32",
            "--index",
            "5",
            "--stack",
            "Float",
        ])
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SlotOutOfBounds>(),
            Some(&SlotOutOfBounds { index: 5, len: 1 })
        );
    }

    #[test]
    fn empty_type_name_is_rejected() {
        let err = failure(&[
            "type-mismatch",
            "Add",
            "--expected",
            "",
            "--index",
            "0",
            "--stack",
            "Float",
        ])
        .unwrap_err();

        assert_eq!(err.downcast_ref::<EmptyTypeName>(), Some(&EmptyTypeName));
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = Cli::try_parse_from(["explain", "--help"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn missing_subcommand_is_a_failure() {
        let err = Cli::try_parse_from(["explain"]).unwrap_err();

        assert!(err.use_stderr());
        assert_ne!(err.exit_code(), 0);
    }
}
