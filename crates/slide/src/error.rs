use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter both text and pattern")]
    MissingInput,

    #[error("Unknown example '{0}' (run `slide examples` to list them)")]
    UnknownExample(String),

    #[error("Invalid speed {0}: expected 0 or a value between 0.1 and 2.0")]
    InvalidSpeed(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
