use crate::catalog::Example;
use slide_match::{Comparison, EdgeCase, MatchSet};
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const RULE_WIDTH: usize = 60;

pub struct Output<W = StandardStream> {
    stdout: W,
}

impl Output<StandardStream> {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }
}

impl Output<Buffer> {
    /// Uncoloured in-memory output.
    pub fn buffer() -> Self {
        Self {
            stdout: Buffer::no_color(),
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.stdout.as_slice()).into_owned()
    }
}

impl<W: WriteColor> Output<W> {
    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_bold_color(&mut self, color: Color) {
        let _ = self
            .stdout
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.stdout)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.stdout, "{}", "-".repeat(RULE_WIDTH))
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        self.set_bold();
        writeln!(self.stdout, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.stdout, "{}", title)?;
        writeln!(self.stdout, "{}", "=".repeat(RULE_WIDTH))?;
        self.reset();
        Ok(())
    }

    /// Prompt without a trailing newline.
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        self.set_bold();
        write!(self.stdout, "{}", message)?;
        self.reset();
        self.stdout.flush()
    }

    pub fn print_edge_case(&mut self, edge: &EdgeCase) -> io::Result<()> {
        self.set_color(Color::Yellow);
        writeln!(self.stdout, "⚠ {}", edge)?;
        self.reset();
        Ok(())
    }

    pub fn print_case_insensitive_notice(&mut self) -> io::Result<()> {
        self.set_color(Color::Cyan);
        writeln!(self.stdout, "Case-insensitive search mode")?;
        self.reset();
        Ok(())
    }

    pub fn print_search_header(
        &mut self,
        text: &str,
        pattern: &str,
        text_len: usize,
        pattern_len: usize,
        limit: usize,
    ) -> io::Result<()> {
        self.set_bold_color(Color::Cyan);
        writeln!(self.stdout, "Searching for '{}' in '{}'", pattern, text)?;
        self.reset();
        self.set_color(Color::Blue);
        writeln!(
            self.stdout,
            "Text length: {}, Pattern length: {}",
            text_len, pattern_len
        )?;
        writeln!(self.stdout, "Will check positions 0 to {}", limit - 1)?;
        self.reset();
        Ok(())
    }

    pub fn print_position(&mut self, offset: usize) -> io::Result<()> {
        writeln!(self.stdout)?;
        self.set_bold_color(Color::Magenta);
        writeln!(self.stdout, "Position {}:", offset)?;
        self.reset();
        Ok(())
    }

    pub fn print_comparison(&mut self, cmp: &Comparison) -> io::Result<()> {
        write!(
            self.stdout,
            "   Comparing: text[{}]='{}' with pattern[{}]='{}' ",
            cmp.text_index, cmp.text_char, cmp.pattern_index, cmp.pattern_char
        )?;
        if cmp.matched {
            self.set_color(Color::Green);
            writeln!(self.stdout, "✓")?;
        } else {
            self.set_color(Color::Red);
            writeln!(self.stdout, "✗")?;
        }
        self.reset();
        Ok(())
    }

    pub fn print_mismatch(&mut self, offset: usize) -> io::Result<()> {
        self.set_color(Color::Red);
        writeln!(self.stdout, "   ✗ No match at position {}", offset)?;
        self.reset();
        Ok(())
    }

    /// Announce a match and mark it under the text with carets.
    pub fn print_match(
        &mut self,
        offset: usize,
        text: &[char],
        pattern_len: usize,
    ) -> io::Result<()> {
        self.set_bold_color(Color::Green);
        writeln!(self.stdout, "   ✓ MATCH FOUND at position {}!", offset)?;
        self.reset();
        let text: String = text.iter().collect();
        writeln!(self.stdout, "   {}", text)?;
        self.set_color(Color::Green);
        writeln!(
            self.stdout,
            "   {}{}",
            " ".repeat(offset),
            "^".repeat(pattern_len)
        )?;
        self.reset();
        Ok(())
    }

    /// Draw the text as a row of cells with the pattern aligned under `offset`.
    ///
    /// The cell pair under comparison is green or red depending on the
    /// outcome; other cells inside the window are bold.
    pub fn print_window(
        &mut self,
        text: &[char],
        pattern: &[char],
        offset: usize,
        current: Option<&Comparison>,
    ) -> io::Result<()> {
        let window = offset..offset + pattern.len();

        write!(self.stdout, "   text    ")?;
        for (i, c) in text.iter().enumerate() {
            match current {
                Some(cmp) if cmp.text_index == i => {
                    self.set_bold_color(if cmp.matched { Color::Green } else { Color::Red });
                }
                _ if window.contains(&i) => self.set_bold(),
                _ => self.set_dim(),
            }
            write!(self.stdout, "[{}]", c)?;
            self.reset();
        }
        writeln!(self.stdout)?;

        write!(self.stdout, "   pattern {}", "   ".repeat(offset))?;
        for (j, c) in pattern.iter().enumerate() {
            match current {
                Some(cmp) if cmp.pattern_index == j => {
                    self.set_bold_color(if cmp.matched { Color::Green } else { Color::Red });
                }
                Some(cmp) if j > cmp.pattern_index => self.set_dim(),
                _ => self.set_bold(),
            }
            write!(self.stdout, "[{}]", c)?;
            self.reset();
        }
        writeln!(self.stdout)?;
        self.stdout.flush()
    }

    pub fn print_outcome(
        &mut self,
        text: &str,
        pattern: &str,
        offsets: &[usize],
    ) -> io::Result<()> {
        if offsets.is_empty() {
            self.set_color(Color::Red);
            writeln!(
                self.stdout,
                "✗ Pattern '{}' not found in '{}'",
                pattern, text
            )?;
        } else {
            self.set_bold_color(Color::Green);
            writeln!(
                self.stdout,
                "✓ Found {} match(es) at position(s): {:?}",
                offsets.len(),
                offsets
            )?;
        }
        self.reset();
        Ok(())
    }

    pub fn print_summary(&mut self, matches: &MatchSet) -> io::Result<()> {
        let describe = |offset: Option<usize>| {
            offset.map_or_else(|| "Not found".to_string(), |o| o.to_string())
        };

        writeln!(self.stdout)?;
        self.set_bold();
        writeln!(self.stdout, "Summary:")?;
        self.reset();
        writeln!(self.stdout, "   First occurrence: {}", describe(matches.first()))?;
        writeln!(self.stdout, "   Last occurrence: {}", describe(matches.last()))?;
        writeln!(self.stdout, "   Total count: {}", matches.count())
    }

    /// Report a run that was stopped before completion.
    pub fn print_stopped(&mut self, partial: &[usize]) -> io::Result<()> {
        writeln!(self.stdout)?;
        self.set_color(Color::Yellow);
        writeln!(self.stdout, "⊘ Search stopped by user")?;
        self.reset();
        if !partial.is_empty() {
            self.set_dim();
            writeln!(
                self.stdout,
                "  partial, not the full result: matches seen so far at {:?}",
                partial
            )?;
            self.reset();
        }
        Ok(())
    }

    pub fn print_examples(&mut self, examples: &[Example]) -> io::Result<()> {
        for example in examples {
            self.set_bold();
            write!(self.stdout, "{}", example.name)?;
            self.reset();
            writeln!(
                self.stdout,
                "\n  Text: '{}' | Pattern: '{}'",
                example.text, example.pattern
            )?;
        }
        Ok(())
    }

    pub fn print_example_results(&mut self, results: &[(&Example, MatchSet)]) -> io::Result<()> {
        for (example, matches) in results {
            if matches.is_empty() {
                self.set_color(Color::Red);
                write!(self.stdout, "✗")?;
            } else {
                self.set_color(Color::Green);
                write!(self.stdout, "✓")?;
            }
            self.reset();
            self.set_bold();
            write!(self.stdout, " {}", example.name)?;
            self.reset();
            writeln!(
                self.stdout,
                ": '{}' in '{}' -> {}",
                example.pattern, example.text, matches
            )?;
        }
        Ok(())
    }

    /// One-line result used by the quick summary section of the tour.
    pub fn print_quick_summary(
        &mut self,
        text: &str,
        pattern: &str,
        matches: &MatchSet,
    ) -> io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "Text: '{}' | Pattern: '{}'", text, pattern)?;
        writeln!(self.stdout, "  Positions: {}", matches)?;
        writeln!(
            self.stdout,
            "  First at: {}, Count: {}",
            matches.first_or_sentinel(),
            matches.count()
        )
    }
}
