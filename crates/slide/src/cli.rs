use crate::animate::Pacing;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "slide",
    about = "Naive substring search, step by step",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for a pattern and report every position it occurs at
    Search {
        /// Text to search in
        text: String,

        /// Pattern to search for
        pattern: String,

        /// Ignore case when comparing characters
        #[arg(short, long)]
        ignore_case: bool,

        /// Print every comparison as it happens
        #[arg(short, long, conflicts_with = "json")]
        verbose: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Animate a search one comparison at a time (Ctrl-C stops it)
    Animate {
        /// Text to search in
        text: Option<String>,

        /// Pattern to search for
        pattern: Option<String>,

        /// Load a named example instead (see `slide examples`)
        #[arg(short, long, conflicts_with_all = ["text", "pattern"])]
        example: Option<String>,

        /// Ignore case when comparing characters
        #[arg(short, long)]
        ignore_case: bool,

        /// Seconds per step unit, between 0.1 and 2.0 (0 disables pauses)
        #[arg(long, env = "SLIDE_SPEED", default_value_t = Pacing::DEFAULT)]
        speed: f64,
    },

    /// List the built-in examples
    Examples {
        /// Also search each example and show the result
        #[arg(short, long)]
        run: bool,

        /// Ignore case when running the examples
        #[arg(short, long, requires = "run")]
        ignore_case: bool,
    },

    /// Explain the algorithm and walk through demonstration searches
    Tour {
        /// Skip the explanation
        #[arg(long)]
        no_explain: bool,

        /// Finish with an interactive search
        #[arg(long)]
        interactive: bool,
    },

    /// Explain how the algorithm works
    Explain,

    /// Enter a text and a pattern at the prompt
    Interactive {
        /// Ignore case when comparing characters
        #[arg(short, long)]
        ignore_case: bool,
    },
}
