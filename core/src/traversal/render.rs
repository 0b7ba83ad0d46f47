use super::QueryOutcome;
use std::io::{self, Write};

const TERMINATOR: &str = "***";

/// Writes a query outcome as the human-readable collaboration listing.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &QueryOutcome) -> io::Result<()> {
    match outcome {
        QueryOutcome::Found { steps } => {
            for step in steps {
                writeln!(
                    out,
                    r#""{}" collaborated with "{}" in "{}"."#,
                    step.from, step.to, step.song
                )?;
            }
            writeln!(out, "{TERMINATOR}")
        }
        QueryOutcome::NoPath { from, to } => {
            writeln!(out, r#"A path does not exist between "{from}" and "{to}"."#)?;
            writeln!(out, "{TERMINATOR}")
        }
        QueryOutcome::NotFound { missing } => {
            for name in missing {
                writeln!(out, r#""{name}" was not found in the dataset :("#)?;
            }
            Ok(())
        }
    }
}
