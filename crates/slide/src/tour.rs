//! Guided walkthrough: an explanation of the algorithm followed by a set of
//! narrated demonstration searches.

use crate::output::Output;
use crate::report::{report, Verbosity};
use slide_match::{search, CaseSensitivity};
use std::io;
use termcolor::WriteColor;

pub const EXPLANATION: &str = "\
HOW THE PATTERN SEARCH ALGORITHM WORKS

The idea:
   Slide the pattern across the text, one position at a time,
   and check whether every character matches at each position.

The steps:
   1. Start at position 0 of the text.
   2. Compare the pattern with the text at the current position,
      one character at a time.
        - all characters match: record the position
        - a character differs: stop comparing at this position
   3. Slide to the next position.
   4. Repeat until the pattern no longer fits in the rest of the text.
   5. Return every recorded position.

Sliding window:
   Text:    b a n a n a
   Pattern: a n a

   Position 0: [b a n] a n a   no match (b != a)
   Position 1:  b [a n a] n a  match
   Position 2:  b a [n a n] a  no match (n != a)
   Position 3:  b a n [a n a]  match

Edge cases:
   An empty pattern, an empty text, or a pattern longer than the
   text all produce no matches.

Time complexity:
   n positions, up to m comparisons at each: O(n x m)
   where n is the text length and m the pattern length.

Why \"naive\":
   Every position is checked, even where smarter algorithms
   (KMP, Boyer-Moore, Rabin-Karp) would skip ahead. That is what
   makes it a good first algorithm to study.
";

/// Narrated demonstrations: (title, text, pattern).
pub const DEMOS: &[(&str, &str, &str)] = &[
    ("Basic Search", "hello world", "wor"),
    ("Overlapping Matches", "banana", "ana"),
    ("Pattern Not Found", "hello", "world"),
    ("Repeated Characters", "aaaa", "aa"),
    ("Empty Text", "", "test"),
    ("Pattern Longer Than Text", "hi", "hello"),
    ("Single Character", "abcabc", "a"),
    ("Exact Match", "hello", "hello"),
];

/// Pairs shown as one-line summaries at the end of the tour.
pub const QUICK: &[(&str, &str)] = &[
    ("programming", "gram"),
    ("Python is awesome", "is"),
    ("Mississippi", "issi"),
    ("test", "testing"),
];

pub fn explain<W: WriteColor>(output: &mut Output<W>) -> io::Result<()> {
    output.blank()?;
    output.line(EXPLANATION)
}

pub fn run_demos<W: WriteColor>(output: &mut Output<W>) -> io::Result<()> {
    output.heading("STRING PATTERN SEARCH - DEMONSTRATIONS")?;

    let mut number = 0;
    for (title, text, pattern) in DEMOS {
        number += 1;
        output.blank()?;
        output.heading(&format!("TEST {}: {}", number, title))?;
        report(output, text, pattern, CaseSensitivity::Sensitive, Verbosity::Verbose)?;
    }

    number += 1;
    output.blank()?;
    output.heading(&format!("TEST {}: Case-Insensitive Search", number))?;
    report(
        output,
        "Hello World",
        "world",
        CaseSensitivity::Insensitive,
        Verbosity::Verbose,
    )?;

    number += 1;
    output.blank()?;
    output.heading(&format!("TEST {}: Quick Summary", number))?;
    for (text, pattern) in QUICK {
        let matches = search(text, pattern, CaseSensitivity::Sensitive);
        output.print_quick_summary(text, pattern, &matches)?;
    }
    Ok(())
}

pub fn print_closing<W: WriteColor>(output: &mut Output<W>) -> io::Result<()> {
    output.blank()?;
    output.heading("Pattern search tour complete")?;
    output.line("Next steps:")?;
    output.line("   - Try skipping positions that cannot possibly match")?;
    output.line("   - Read up on KMP and Boyer-Moore")?;
    output.line("   - Animate your own input with `slide animate <TEXT> <PATTERN>`")
}
