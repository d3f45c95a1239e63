use thiserror::Error;

/// Failure writing to the system clipboard.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("canned response set must not be empty")]
    EmptyResponseSet,
}
