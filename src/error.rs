//! Error types for the Thesaurus library.
//!
//! This module provides error handling for all Thesaurus operations.
//! All errors are represented by the [`ThesaurusError`] enum, which carries
//! enough detail for the HTTP boundary to pick a status code and a
//! user-facing message.
//!
//! # Examples
//!
//! ```
//! use thesaurus::error::{Result, ThesaurusError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(ThesaurusError::invalid_token("Token must be alphabetic"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Thesaurus operations.
///
/// This enum represents all possible errors that can occur in the Thesaurus
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
///
/// The synonym graph itself never fails; every domain variant here is raised
/// by the service layer when a request violates a business precondition.
#[derive(Error, Debug)]
pub enum ThesaurusError {
    /// I/O errors (socket binding, runtime construction, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A token failed shape validation (empty, non-alphabetic, too long)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// A word was related to itself
    #[error("Self synonym: {0}")]
    SelfSynonym(String),

    /// The requested relation already exists
    #[error("Duplicate synonym: {0}")]
    DuplicateSynonym(String),

    /// The requested relation does not exist
    #[error("Synonym not found: {0}")]
    SynonymNotFound(String),

    /// Server-related errors (bind failures, runtime errors)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ThesaurusError.
pub type Result<T> = std::result::Result<T, ThesaurusError>;

impl ThesaurusError {
    /// Create a new invalid token error.
    pub fn invalid_token<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::InvalidToken(msg.into())
    }

    /// Create a new self synonym error.
    pub fn self_synonym<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::SelfSynonym(msg.into())
    }

    /// Create a new duplicate synonym error.
    pub fn duplicate_synonym<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::DuplicateSynonym(msg.into())
    }

    /// Create a new synonym not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::SynonymNotFound(msg.into())
    }

    /// Create a new server error.
    pub fn server<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::Server(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ThesaurusError::invalid_token("Test token error");
        assert_eq!(error.to_string(), "Invalid token: Test token error");

        let error = ThesaurusError::duplicate_synonym("Test duplicate error");
        assert_eq!(error.to_string(), "Duplicate synonym: Test duplicate error");

        let error = ThesaurusError::not_found("Test not found error");
        assert_eq!(error.to_string(), "Synonym not found: Test not found error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let thesaurus_error = ThesaurusError::from(io_error);

        match thesaurus_error {
            ThesaurusError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
