//! Console reporting of a search, with optional step-by-step commentary.

use crate::error::Result;
use crate::output::Output;
use serde_json::json;
use slide_match::{search, search_with, CaseSensitivity, MatchSet, Observer, Step};
use std::io::{self, Write};
use termcolor::WriteColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Header and final result only.
    Quiet,
    /// Every comparison is printed.
    Verbose,
    /// Every comparison plus a drawing of the window at each step.
    Animated,
}

/// Observer that narrates a search run onto an [`Output`].
///
/// `text` and `pattern` are the buffers the comparison runs on, i.e. already
/// folded when the search is case-insensitive.
pub struct Commentary<'a, W: WriteColor> {
    output: &'a mut Output<W>,
    text: &'a [char],
    pattern: &'a [char],
    verbosity: Verbosity,
    error: Option<io::Error>,
}

impl<'a, W: WriteColor> Commentary<'a, W> {
    pub fn new(
        output: &'a mut Output<W>,
        text: &'a [char],
        pattern: &'a [char],
        verbosity: Verbosity,
    ) -> Self {
        Self {
            output,
            text,
            pattern,
            verbosity,
            error: None,
        }
    }

    /// Return the first write error hit while observing, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => self.output.flush(),
        }
    }

    fn render(&mut self, step: &Step) -> io::Result<()> {
        let detailed = self.verbosity != Verbosity::Quiet;
        let animated = self.verbosity == Verbosity::Animated;

        match step {
            Step::Skipped(edge) => self.output.print_edge_case(edge),
            Step::Begin {
                text_len,
                pattern_len,
                limit,
            } => {
                let text: String = self.text.iter().collect();
                let pattern: String = self.pattern.iter().collect();
                self.output.blank()?;
                self.output
                    .print_search_header(&text, &pattern, *text_len, *pattern_len, *limit)?;
                if detailed {
                    self.output.rule()?;
                }
                Ok(())
            }
            Step::Offset(offset) if detailed => {
                self.output.print_position(*offset)?;
                if animated {
                    self.output
                        .print_window(self.text, self.pattern, *offset, None)?;
                }
                Ok(())
            }
            Step::Compare(cmp) if detailed => {
                if animated {
                    self.output
                        .print_window(self.text, self.pattern, cmp.offset, Some(cmp))?;
                }
                self.output.print_comparison(cmp)
            }
            Step::Mismatch(offset) if detailed => self.output.print_mismatch(*offset),
            Step::Match(offset) if detailed => {
                self.output
                    .print_match(*offset, self.text, self.pattern.len())
            }
            Step::Finish if detailed => self.output.rule(),
            _ => Ok(()),
        }
    }
}

impl<W: WriteColor> Observer for Commentary<'_, W> {
    fn observe(&mut self, step: &Step) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.render(step) {
            self.error = Some(e);
        }
    }
}

/// Run a search, narrating it onto `output`, and print the outcome line.
pub fn report<W: WriteColor>(
    output: &mut Output<W>,
    text: &str,
    pattern: &str,
    case: CaseSensitivity,
    verbosity: Verbosity,
) -> io::Result<MatchSet> {
    if !case.is_sensitive() {
        output.print_case_insensitive_notice()?;
    }

    let prepared_text = case.prepare(text);
    let prepared_pattern = case.prepare(pattern);

    let mut commentary = Commentary::new(output, &prepared_text, &prepared_pattern, verbosity);
    let matches = search_with(text, pattern, case, &mut commentary);
    commentary.finish()?;

    let shown_text: String = prepared_text.iter().collect();
    let shown_pattern: String = prepared_pattern.iter().collect();
    output.blank()?;
    output.print_outcome(&shown_text, &shown_pattern, matches.offsets())?;
    Ok(matches)
}

/// Print the search result as a single JSON object.
pub fn report_json<O: Write>(
    out: &mut O,
    text: &str,
    pattern: &str,
    case: CaseSensitivity,
) -> Result<MatchSet> {
    let matches = search(text, pattern, case);
    let value = json!({
        "text": text,
        "pattern": pattern,
        "case_sensitive": case.is_sensitive(),
        "offsets": matches.offsets(),
        "first": matches.first(),
        "last": matches.last(),
        "count": matches.count(),
    });
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(matches)
}
