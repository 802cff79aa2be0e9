//! Naive substring search.
//!
//! The pattern is slid across the text one character at a time and compared
//! position by position at every offset. Every offset is tried, so
//! overlapping occurrences are all reported.
//!
//! # Example
//!
//! ```
//! use slide_match::{count_occurrences, find_first, search, CaseSensitivity};
//!
//! let matches = search("banana", "ana", CaseSensitivity::Sensitive);
//! assert_eq!(matches.offsets(), &[1, 3]);
//!
//! // Overlapping occurrences are reported
//! assert_eq!(search("aaaa", "aa", true).offsets(), &[0, 1, 2]);
//!
//! // An empty pattern matches nowhere
//! assert!(search("hello", "", true).is_empty());
//!
//! assert_eq!(search("Hello World", "world", false).offsets(), &[6]);
//! assert_eq!(find_first("Mississippi", "issi", true), Some(1));
//! assert_eq!(count_occurrences("Mississippi", "issi", true), 2);
//! ```
//!
//! Every step of a run can be observed without changing the result:
//!
//! ```
//! use slide_match::{search_with, CaseSensitivity, Step};
//!
//! let mut steps: Vec<Step> = Vec::new();
//! let matches = search_with("abab", "ab", CaseSensitivity::Sensitive, &mut steps);
//!
//! let found: Vec<usize> = steps
//!     .iter()
//!     .filter_map(|s| match s {
//!         Step::Match(offset) => Some(*offset),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(found, matches.offsets());
//! ```

mod fold;
mod matcher;
mod observe;

pub use fold::{fold, fold_char};
pub use matcher::{
    count_occurrences, find_first, find_last, search, search_with, CaseSensitivity, EdgeCase,
    MatchSet,
};
pub use observe::{from_fn, Comparison, FnObserver, NoopObserver, Observer, Step};
