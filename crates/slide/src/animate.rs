//! Paced, cancellable walk through a search for live display.
//!
//! The walk re-derives every step itself so it can pause between steps and
//! stop early; the result of a stopped walk is partial and must not be
//! treated as the full set of matches.

use crate::catalog;
use crate::error::{Error, Result};
use slide_match::{Comparison, EdgeCase, Observer, Step};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Delay between animation steps, scaled by a speed factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    speed: f64,
}

impl Pacing {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 2.0;
    pub const DEFAULT: f64 = 0.5;

    /// Accepts `0` (no delay) or a speed in `MIN..=MAX`.
    pub fn new(speed: f64) -> Result<Self> {
        if speed == 0.0 || (Self::MIN..=Self::MAX).contains(&speed) {
            Ok(Self { speed })
        } else {
            Err(Error::InvalidSpeed(speed))
        }
    }

    pub fn instant() -> Self {
        Self { speed: 0.0 }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pause after moving to a new offset.
    pub fn position(&self) -> Duration {
        Duration::from_secs_f64(self.speed * 0.3)
    }

    /// Pause after each character comparison.
    pub fn comparison(&self) -> Duration {
        Duration::from_secs_f64(self.speed * 0.5)
    }

    /// Pause after a match is confirmed.
    pub fn found(&self) -> Duration {
        Duration::from_secs_f64(self.speed * 1.0)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            speed: Self::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    /// Offsets confirmed before the walk ended.
    pub offsets: Vec<usize>,
    pub cancelled: bool,
}

impl Animation {
    /// The offsets, only when the walk ran to completion.
    pub fn complete_offsets(&self) -> Option<&[usize]> {
        if self.cancelled {
            None
        } else {
            Some(&self.offsets)
        }
    }
}

/// Pick the text and pattern to animate from positional input or a catalog
/// example name.
pub fn resolve_input(
    text: Option<String>,
    pattern: Option<String>,
    example: Option<&str>,
) -> Result<(String, String)> {
    if let Some(name) = example {
        let example = catalog::lookup(name)?;
        return Ok((example.text.to_string(), example.pattern.to_string()));
    }

    let text = text.unwrap_or_default();
    let pattern = pattern.unwrap_or_default();
    if text.is_empty() && pattern.is_empty() {
        return Err(Error::MissingInput);
    }
    Ok((text, pattern))
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Walk every offset of `text`, reporting each step to `observer` and
/// pausing according to `pacing`.
///
/// `cancel` is checked before each offset and before each comparison.
pub fn animate<O: Observer + ?Sized>(
    text: &[char],
    pattern: &[char],
    pacing: &Pacing,
    cancel: &AtomicBool,
    observer: &mut O,
) -> Animation {
    let debug = std::env::var("SLIDE_DEBUG").is_ok();
    let mut animation = Animation {
        offsets: Vec::new(),
        cancelled: false,
    };

    if let Some(edge) = EdgeCase::check(text.len(), pattern.len()) {
        observer.observe(&Step::Skipped(edge));
        return animation;
    }

    let limit = text.len() - pattern.len() + 1;
    observer.observe(&Step::Begin {
        text_len: text.len(),
        pattern_len: pattern.len(),
        limit,
    });

    'offsets: for offset in 0..limit {
        if cancel.load(Ordering::SeqCst) {
            animation.cancelled = true;
            break;
        }

        observer.observe(&Step::Offset(offset));
        if debug {
            eprintln!(
                "[DEBUG PACING] offset: {}, speed: {}, pause: {:?}",
                offset,
                pacing.speed(),
                pacing.position()
            );
        }
        pause(pacing.position());

        let mut is_match = true;
        for (pattern_index, &pattern_char) in pattern.iter().enumerate() {
            if cancel.load(Ordering::SeqCst) {
                animation.cancelled = true;
                break 'offsets;
            }

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
            pause(pacing.comparison());

            if !matched {
                is_match = false;
                observer.observe(&Step::Mismatch(offset));
                break;
            }
        }

        if is_match {
            animation.offsets.push(offset);
            observer.observe(&Step::Match(offset));
            pause(pacing.found());
        }
    }

    if !animation.cancelled {
        observer.observe(&Step::Finish);
    }
    animation
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_match::{from_fn, search, CaseSensitivity};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_pacing_bounds() {
        assert!(Pacing::new(0.1).is_ok());
        assert!(Pacing::new(2.0).is_ok());
        assert!(Pacing::new(0.0).is_ok());
        assert!(matches!(Pacing::new(0.05), Err(Error::InvalidSpeed(_))));
        assert!(matches!(Pacing::new(2.5), Err(Error::InvalidSpeed(_))));
        assert!(matches!(Pacing::new(-1.0), Err(Error::InvalidSpeed(_))));
        assert!(matches!(Pacing::new(f64::NAN), Err(Error::InvalidSpeed(_))));
    }

    #[test]
    fn test_pacing_delays() {
        let pacing = Pacing::new(1.0).unwrap();
        assert!((pacing.position().as_secs_f64() - 0.3).abs() < 1e-6);
        assert_eq!(pacing.comparison(), Duration::from_millis(500));
        assert_eq!(pacing.found(), Duration::from_secs(1));
        assert_eq!(Pacing::default().speed(), 0.5);
        assert!(Pacing::instant().found().is_zero());
    }

    #[test]
    fn test_complete_walk_agrees_with_search() {
        let cancel = AtomicBool::new(false);
        for (text, pattern) in [
            ("banana", "ana"),
            ("aaaa", "aa"),
            ("Mississippi", "issi"),
            ("hello", "world"),
            ("", "x"),
        ] {
            let mut steps: Vec<Step> = Vec::new();
            let animation = animate(
                &chars(text),
                &chars(pattern),
                &Pacing::instant(),
                &cancel,
                &mut steps,
            );
            assert!(!animation.cancelled);
            assert_eq!(
                search(text, pattern, CaseSensitivity::Sensitive),
                animation.offsets
            );
            assert_eq!(
                animation.complete_offsets(),
                Some(animation.offsets.as_slice())
            );
        }
    }

    #[test]
    fn test_same_steps_as_search() {
        let cancel = AtomicBool::new(false);
        let mut animated: Vec<Step> = Vec::new();
        animate(
            &chars("abab"),
            &chars("ab"),
            &Pacing::instant(),
            &cancel,
            &mut animated,
        );

        let mut searched: Vec<Step> = Vec::new();
        slide_match::search_with("abab", "ab", CaseSensitivity::Sensitive, &mut searched);
        assert_eq!(animated, searched);
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = AtomicBool::new(true);
        let mut steps: Vec<Step> = Vec::new();
        let animation = animate(
            &chars("banana"),
            &chars("ana"),
            &Pacing::instant(),
            &cancel,
            &mut steps,
        );
        assert!(animation.cancelled);
        assert!(animation.offsets.is_empty());
        assert_eq!(animation.complete_offsets(), None);
        assert!(!steps.contains(&Step::Finish));
    }

    #[test]
    fn test_cancel_after_first_match_is_partial() {
        let cancel = AtomicBool::new(false);
        let mut observer = from_fn(|step: &Step| {
            if let Step::Match(_) = step {
                cancel.store(true, Ordering::SeqCst);
            }
        });
        let animation = animate(
            &chars("aaaa"),
            &chars("aa"),
            &Pacing::instant(),
            &cancel,
            &mut observer,
        );
        assert!(animation.cancelled);
        assert_eq!(animation.offsets, vec![0]);
        assert_eq!(animation.complete_offsets(), None);
    }

    #[test]
    fn test_cancel_mid_offset_does_not_record_it() {
        let cancel = AtomicBool::new(false);
        let mut observer = from_fn(|step: &Step| {
            if let Step::Compare(Comparison {
                offset: 1,
                pattern_index: 0,
                ..
            }) = step
            {
                cancel.store(true, Ordering::SeqCst);
            }
        });
        let animation = animate(
            &chars("aaaa"),
            &chars("aa"),
            &Pacing::instant(),
            &cancel,
            &mut observer,
        );
        assert!(animation.cancelled);
        assert_eq!(animation.offsets, vec![0]);
    }

    #[test]
    fn test_resolve_input() {
        assert_eq!(
            resolve_input(Some("banana".into()), Some("ana".into()), None).unwrap(),
            ("banana".to_string(), "ana".to_string())
        );
        assert_eq!(
            resolve_input(None, None, Some("repeated characters")).unwrap(),
            ("aaaa".to_string(), "aa".to_string())
        );
        assert!(matches!(
            resolve_input(None, None, None),
            Err(Error::MissingInput)
        ));
        assert!(matches!(
            resolve_input(Some(String::new()), Some(String::new()), None),
            Err(Error::MissingInput)
        ));
        assert!(matches!(
            resolve_input(None, None, Some("nope")),
            Err(Error::UnknownExample(_))
        ));
        // Only one side missing is left to the edge-case guards
        assert_eq!(
            resolve_input(Some("hello".into()), None, None).unwrap(),
            ("hello".to_string(), String::new())
        );
    }
}
