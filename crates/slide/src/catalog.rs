//! Ready-made (text, pattern) pairs for trying the search out.

use crate::error::{Error, Result};
use rayon::prelude::*;
use slide_match::{search, CaseSensitivity, MatchSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub name: &'static str,
    pub text: &'static str,
    pub pattern: &'static str,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        name: "Basic Search",
        text: "hello world",
        pattern: "wor",
    },
    Example {
        name: "Overlapping Matches",
        text: "banana",
        pattern: "ana",
    },
    Example {
        name: "Pattern Not Found",
        text: "hello",
        pattern: "world",
    },
    Example {
        name: "Repeated Characters",
        text: "aaaa",
        pattern: "aa",
    },
    Example {
        name: "Single Character",
        text: "abcabc",
        pattern: "a",
    },
    Example {
        name: "Multiple Words",
        text: "the quick brown fox",
        pattern: "quick",
    },
    Example {
        name: "Mississippi Test",
        text: "Mississippi",
        pattern: "issi",
    },
    Example {
        name: "Programming",
        text: "programming is fun",
        pattern: "gram",
    },
];

/// Look an example up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Example> {
    EXAMPLES
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
}

pub fn lookup(name: &str) -> Result<&'static Example> {
    find(name).ok_or_else(|| Error::UnknownExample(name.to_string()))
}

/// Search every example, in parallel. Results keep catalog order.
pub fn run_all(case: CaseSensitivity) -> Vec<(&'static Example, MatchSet)> {
    EXAMPLES
        .par_iter()
        .map(|example| (example, search(example.text, example.pattern, case)))
        .collect()
}
