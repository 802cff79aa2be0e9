pub mod animate;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interactive;
pub mod output;
pub mod report;
pub mod tour;

pub use slide_match::{search, CaseSensitivity, MatchSet};
