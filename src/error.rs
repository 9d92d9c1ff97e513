use thiserror::Error;

/// Errors surfaced by the cube model, the solution table, and the solver.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state key must be exactly 24 characters long, got {got}")]
    InvalidLength { got: usize },

    #[error("invalid color character '{character}' at position {position}")]
    InvalidColor { character: char, position: usize },

    #[error("expected exactly four '{color}' stickers, got {count}")]
    InvalidColorCount { color: char, count: usize },

    #[error("state not present in the solution tree")]
    NotFound,

    #[error("solution table unavailable: {source}")]
    TableUnavailable {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed table entry: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
