//! Error types for the nhamlan library.
//!
//! All fallible operations return [`Result`], which wraps [`NhamlanError`].
//! The core computation (decomposition, distance, set construction) never
//! fails; errors come from I/O and serialization only, and a batch run aborts
//! on the first one.

use std::io;

use thiserror::Error;

/// The main error type for nhamlan operations.
#[derive(Error, Debug)]
pub enum NhamlanError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Vocabulary-related errors
    #[error("Vocabulary error: {0}")]
    Vocab(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NhamlanError.
pub type Result<T> = std::result::Result<T, NhamlanError>;

impl NhamlanError {
    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        NhamlanError::Serialization(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocab<S: Into<String>>(msg: S) -> Self {
        NhamlanError::Vocab(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NhamlanError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NhamlanError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NhamlanError::vocab("empty vocabulary");
        assert_eq!(error.to_string(), "Vocabulary error: empty vocabulary");

        let error = NhamlanError::invalid_argument("threshold must be > 0");
        assert_eq!(
            error.to_string(),
            "Invalid argument: threshold must be > 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NhamlanError::from(io_error);

        match error {
            NhamlanError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
