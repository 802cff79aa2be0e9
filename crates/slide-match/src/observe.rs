//! Per-step observation of a search run.

use crate::matcher::EdgeCase;
use std::sync::mpsc::Sender;

/// A single character comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub offset: usize,
    pub text_index: usize,
    pub pattern_index: usize,
    pub text_char: char,
    pub pattern_char: char,
    pub matched: bool,
}

/// One event of a search run, in the order the search produces them.
///
/// A run either reports a single `Skipped` and nothing else, or `Begin`,
/// then for each offset `Offset` followed by its comparisons and exactly one
/// of `Mismatch` or `Match`, then `Finish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Skipped(EdgeCase),
    Begin {
        text_len: usize,
        pattern_len: usize,
        limit: usize,
    },
    Offset(usize),
    Compare(Comparison),
    Mismatch(usize),
    Match(usize),
    Finish,
}

pub trait Observer {
    fn observe(&mut self, step: &Step);
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&mut self, _step: &Step) {}
}

impl Observer for Vec<Step> {
    fn observe(&mut self, step: &Step) {
        self.push(*step);
    }
}

impl Observer for Sender<Step> {
    fn observe(&mut self, step: &Step) {
        let _ = self.send(*step);
    }
}

/// Observer built from a closure, see [`from_fn`].
pub struct FnObserver<F>(F);

impl<F: FnMut(&Step)> Observer for FnObserver<F> {
    fn observe(&mut self, step: &Step) {
        (self.0)(step)
    }
}

/// Wrap a closure so it can be passed wherever an [`Observer`] is expected.
pub fn from_fn<F: FnMut(&Step)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}
