use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidMovie(String),
    InvalidSortKey(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidMovie(msg) => write!(f, "invalid movie: {msg}"),
            ModelError::InvalidSortKey(raw) => write!(
                f,
                "unknown sort key '{raw}' (expected 'episode' or 'year')"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
