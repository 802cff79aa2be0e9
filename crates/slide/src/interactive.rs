//! Prompt for a text and a pattern, then search verbosely.

use crate::error::Result;
use crate::output::Output;
use crate::report::{report, Verbosity};
use slide_match::{CaseSensitivity, MatchSet};
use std::io::BufRead;
use termcolor::WriteColor;

/// Read one trimmed line; blank lines and end of input give `None`.
fn ask<R: BufRead, W: WriteColor>(
    input: &mut R,
    output: &mut Output<W>,
    message: &str,
) -> Result<Option<String>> {
    output.prompt(message)?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}

/// Returns `None` when the user skipped either prompt.
pub fn run<R: BufRead, W: WriteColor>(
    input: &mut R,
    output: &mut Output<W>,
    case: CaseSensitivity,
) -> Result<Option<MatchSet>> {
    output.blank()?;
    output.heading("INTERACTIVE PATTERN SEARCH")?;
    output.line("Try your own examples! (or press Enter to skip)")?;
    output.blank()?;

    let Some(text) = ask(input, output, "Enter text to search in: ")? else {
        output.line("Skipped.")?;
        return Ok(None);
    };
    let Some(pattern) = ask(input, output, "Enter pattern to search for: ")? else {
        output.line("Skipped.")?;
        return Ok(None);
    };

    let matches = report(output, &text, &pattern, case, Verbosity::Verbose)?;
    output.print_summary(&matches)?;
    Ok(Some(matches))
}
