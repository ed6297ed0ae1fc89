//! Error types for examline.

use thiserror::Error;

/// Errors that can occur while turning feed text into exam dates.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Feed parse error: {0}")]
    FeedParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for examline-core operations.
pub type CoreResult<T> = Result<T, CoreError>;
