//! The sliding comparison itself and the queries derived from it.

use crate::fold::fold;
use crate::observe::{Comparison, NoopObserver, Observer, Step};
use std::fmt;

/// Whether characters are compared exactly or after case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    pub fn is_sensitive(self) -> bool {
        self == CaseSensitivity::Sensitive
    }

    /// Turn `s` into the character buffer the comparison runs on.
    pub fn prepare(self, s: &str) -> Vec<char> {
        match self {
            CaseSensitivity::Sensitive => s.chars().collect(),
            CaseSensitivity::Insensitive => fold(s),
        }
    }
}

impl From<bool> for CaseSensitivity {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

/// Inputs for which no offset is examined at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCase {
    EmptyPattern,
    EmptyText,
    PatternTooLong { pattern_len: usize, text_len: usize },
}

impl EdgeCase {
    /// Guards are checked in order: empty pattern, empty text, then length.
    pub fn check(text_len: usize, pattern_len: usize) -> Option<EdgeCase> {
        if pattern_len == 0 {
            Some(EdgeCase::EmptyPattern)
        } else if text_len == 0 {
            Some(EdgeCase::EmptyText)
        } else if pattern_len > text_len {
            Some(EdgeCase::PatternTooLong {
                pattern_len,
                text_len,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeCase::EmptyPattern => write!(f, "Pattern is empty!"),
            EdgeCase::EmptyText => write!(f, "Text is empty!"),
            EdgeCase::PatternTooLong {
                pattern_len,
                text_len,
            } => write!(
                f,
                "Pattern (length {}) is longer than text (length {})",
                pattern_len, text_len
            ),
        }
    }
}

/// Every offset at which the pattern occurs, in increasing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchSet {
    offsets: Vec<usize>,
}

impl MatchSet {
    fn push(&mut self, offset: usize) {
        debug_assert!(self.offsets.last().map_or(true, |&last| last < offset));
        self.offsets.push(offset);
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn first(&self) -> Option<usize> {
        self.offsets.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.offsets.last().copied()
    }

    /// First offset, or `-1` when there is none.
    pub fn first_or_sentinel(&self) -> isize {
        self.first().map_or(-1, |o| o as isize)
    }

    /// Last offset, or `-1` when there is none.
    pub fn last_or_sentinel(&self) -> isize {
        self.last().map_or(-1, |o| o as isize)
    }

    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.offsets.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }
}

impl fmt::Display for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, offset) in self.offsets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", offset)?;
        }
        write!(f, "]")
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<MatchSet> for Vec<usize> {
    fn from(set: MatchSet) -> Self {
        set.offsets
    }
}

impl PartialEq<[usize]> for MatchSet {
    fn eq(&self, other: &[usize]) -> bool {
        self.offsets == other
    }
}

impl PartialEq<Vec<usize>> for MatchSet {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.offsets == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for MatchSet {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.offsets == other
    }
}

/// Find every offset of `pattern` in `text`.
///
/// An empty pattern, an empty text, or a pattern longer than the text all
/// give an empty result. Offsets count characters, not bytes.
pub fn search(text: &str, pattern: &str, case: impl Into<CaseSensitivity>) -> MatchSet {
    search_with(text, pattern, case.into(), &mut NoopObserver)
}

/// Same as [`search`], reporting every step to `observer`.
///
/// In insensitive mode the observer sees folded characters.
pub fn search_with<O: Observer + ?Sized>(
    text: &str,
    pattern: &str,
    case: CaseSensitivity,
    observer: &mut O,
) -> MatchSet {
    let text = case.prepare(text);
    let pattern = case.prepare(pattern);
    search_chars(&text, &pattern, observer)
}

/// Exact comparison over character buffers.
fn search_chars<O: Observer + ?Sized>(
    text: &[char],
    pattern: &[char],
    observer: &mut O,
) -> MatchSet {
    let mut matches = MatchSet::default();

    if let Some(edge) = EdgeCase::check(text.len(), pattern.len()) {
        observer.observe(&Step::Skipped(edge));
        return matches;
    }

    let limit = text.len() - pattern.len() + 1;
    observer.observe(&Step::Begin {
        text_len: text.len(),
        pattern_len: pattern.len(),
        limit,
    });

    for offset in 0..limit {
        observer.observe(&Step::Offset(offset));

        let mut is_match = true;
        for (pattern_index, &pattern_char) in pattern.iter().enumerate() {
            let text_index = offset + pattern_index;
            let text_char = text[text_index];
            let matched = text_char == pattern_char;

            observer.observe(&Step::Compare(Comparison {
                offset,
                text_index,
                pattern_index,
                text_char,
                pattern_char,
                matched,
            }));

            if !matched {
                is_match = false;
                observer.observe(&Step::Mismatch(offset));
                break;
            }
        }

        if is_match {
            matches.push(offset);
            observer.observe(&Step::Match(offset));
        }
    }

    observer.observe(&Step::Finish);
    matches
}

pub fn find_first(text: &str, pattern: &str, case: impl Into<CaseSensitivity>) -> Option<usize> {
    search(text, pattern, case).first()
}

pub fn find_last(text: &str, pattern: &str, case: impl Into<CaseSensitivity>) -> Option<usize> {
    search(text, pattern, case).last()
}

pub fn count_occurrences(text: &str, pattern: &str, case: impl Into<CaseSensitivity>) -> usize {
    search(text, pattern, case).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: [char; 3] = ['a', 'b', 'A'];

    /// All strings over `ALPHABET` up to `max_len` characters.
    fn all_strings(max_len: usize) -> Vec<String> {
        let mut out = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for s in &frontier {
                for c in ALPHABET {
                    let mut t = s.clone();
                    t.push(c);
                    next.push(t);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(search("hello", "hello", true), [0]);
    }

    #[test]
    fn test_overlapping() {
        assert_eq!(search("aaaa", "aa", true), [0, 1, 2]);
        assert_eq!(search("aaaaaaaa", "aaa", true), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_substring_with_skips() {
        assert_eq!(search("banana", "ana", true), [1, 3]);
        assert_eq!(search("hello world hello", "hello", true), [0, 12]);
    }

    #[test]
    fn test_no_match() {
        assert!(search("hello", "world", true).is_empty());
        assert!(search("abcdefgh", "xyz", true).is_empty());
    }

    #[test]
    fn test_single_character() {
        assert_eq!(search("abcabc", "a", true), [0, 3]);
    }

    #[test]
    fn test_empty_pattern_matches_nowhere() {
        assert!(search("hello", "", true).is_empty());
        assert!(search("", "", true).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(search("", "test", true).is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(search("hi", "hello", true).is_empty());
        assert!(search("test", "testing", true).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(search("Hello World", "world", false), [6]);
        assert!(search("Hello World", "world", true).is_empty());
        assert_eq!(
            search("HELLO hello HeLLo", "hello", CaseSensitivity::Insensitive),
            [0, 6, 12]
        );
    }

    #[test]
    fn test_default_is_case_sensitive() {
        assert_eq!(CaseSensitivity::default(), CaseSensitivity::Sensitive);
        assert!(search("ABC", "abc", CaseSensitivity::default()).is_empty());
    }

    #[test]
    fn test_offsets_are_char_offsets() {
        assert_eq!(search("héllo wörld", "wörld", true), [6]);
        assert_eq!(search("日本語の日本", "日本", true), [0, 4]);
        assert_eq!(search("ÉCOLE école", "école", false), [0, 6]);
    }

    #[test]
    fn test_case_insensitive_final_sigma() {
        assert_eq!(search("ΟΔΟΣ", "οδος", false), [0]);
        assert_eq!(search("ΟΔΟΣ", "ς", false), [3]);
        assert!(search("ΟΔΟΣ", "οδος", true).is_empty());
    }

    #[test]
    fn test_derived_queries() {
        assert_eq!(find_first("programming", "gram", true), Some(3));
        assert_eq!(find_first("Python is awesome", "is", true), Some(7));
        assert_eq!(find_last("Mississippi", "issi", true), Some(4));
        assert_eq!(count_occurrences("Mississippi", "issi", true), 2);
        assert_eq!(find_first("test", "testing", true), None);
        assert_eq!(find_last("test", "testing", true), None);
        assert_eq!(count_occurrences("test", "testing", true), 0);
    }

    #[test]
    fn test_sentinels() {
        let set = search("banana", "ana", true);
        assert_eq!(set.first_or_sentinel(), 1);
        assert_eq!(set.last_or_sentinel(), 3);

        let none = search("banana", "xyz", true);
        assert_eq!(none.first_or_sentinel(), -1);
        assert_eq!(none.last_or_sentinel(), -1);
    }

    #[test]
    fn test_match_set_display() {
        assert_eq!(search("banana", "ana", true).to_string(), "[1, 3]");
        assert_eq!(search("banana", "x", true).to_string(), "[]");
    }

    #[test]
    fn test_match_set_contains_and_iter() {
        let set = search("abcabc", "bc", true);
        assert!(set.contains(1));
        assert!(set.contains(4));
        assert!(!set.contains(2));
        assert_eq!(set.iter().sum::<usize>(), 5);
        assert_eq!(Vec::from(set), vec![1, 4]);
    }

    #[test]
    fn test_edge_case_order() {
        assert_eq!(EdgeCase::check(0, 0), Some(EdgeCase::EmptyPattern));
        assert_eq!(EdgeCase::check(0, 3), Some(EdgeCase::EmptyText));
        assert_eq!(
            EdgeCase::check(2, 5),
            Some(EdgeCase::PatternTooLong {
                pattern_len: 5,
                text_len: 2
            })
        );
        assert_eq!(EdgeCase::check(5, 5), None);
    }

    #[test]
    fn test_idempotent() {
        let first = search("abracadabra", "abra", true);
        let second = search("abracadabra", "abra", true);
        assert_eq!(first, second);
        assert_eq!(first, [0, 7]);
    }

    #[test]
    fn test_agrees_with_window_scan_over_small_strings() {
        let strings = all_strings(4);
        for text in &strings {
            let text_chars: Vec<char> = text.chars().collect();
            for pattern in &strings {
                let pattern_chars: Vec<char> = pattern.chars().collect();
                let result = search(text, pattern, true);

                let expected: Vec<usize> = if pattern_chars.is_empty() {
                    Vec::new()
                } else {
                    text_chars
                        .windows(pattern_chars.len())
                        .enumerate()
                        .filter(|(_, w)| *w == pattern_chars.as_slice())
                        .map(|(i, _)| i)
                        .collect()
                };
                assert_eq!(result, expected, "text={text:?} pattern={pattern:?}");
            }
        }
    }

    #[test]
    fn test_offsets_in_bounds_and_increasing() {
        let strings = all_strings(4);
        for text in &strings {
            for pattern in &strings {
                for case in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
                    let folded_text = case.prepare(text);
                    let folded_pattern = case.prepare(pattern);
                    let result = search(text, pattern, case);

                    for pair in result.offsets().windows(2) {
                        assert!(pair[0] < pair[1]);
                    }
                    for offset in &result {
                        assert!(offset + folded_pattern.len() <= folded_text.len());
                        assert_eq!(
                            &folded_text[offset..offset + folded_pattern.len()],
                            folded_pattern.as_slice()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_with_matches_search() {
        let mut steps: Vec<Step> = Vec::new();
        let observed = search_with("Mississippi", "ssi", CaseSensitivity::Sensitive, &mut steps);
        assert_eq!(observed, search("Mississippi", "ssi", true));
        let reported = steps
            .iter()
            .filter(|s| matches!(s, Step::Match(_)))
            .count();
        assert_eq!(reported, observed.count());
    }
}
