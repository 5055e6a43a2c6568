//! Error types for the Spellgram library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellgramError`] enum. Backend, tokenizer and dictionary failures are
//! wrapped with their original cause so callers can tell "no suggestions"
//! apart from "lookup failed".
//!
//! # Examples
//!
//! ```
//! use spellgram::error::{Result, SpellgramError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellgramError::invalid_config("batch_size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause carried by wrapped errors.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for Spellgram operations.
#[derive(Error, Debug)]
pub enum SpellgramError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A query, add, delete or commit against the index backend failed.
    #[error("Backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// Streaming text through the tokenizer failed.
    #[error("Tokenization error: {message}")]
    Tokenization {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// A dictionary file could not be read or indexed.
    #[error("Dictionary file error ({}): {source}", .path.display())]
    DictionaryFile {
        path: PathBuf,
        #[source]
        source: Box<SpellgramError>,
    },

    /// A stored spellcheck document is missing a field or has a bad value.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Error carrying caller-supplied context, printed with its whole chain.
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellgramError.
pub type Result<T> = std::result::Result<T, SpellgramError>;

impl SpellgramError {
    /// Create a new backend error without an underlying cause.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        SpellgramError::Backend {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new backend error wrapping the original cause.
    pub fn backend_with_source<S, E>(msg: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxedCause>,
    {
        SpellgramError::Backend {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new tokenization error.
    pub fn tokenization<S: Into<String>>(msg: S) -> Self {
        SpellgramError::Tokenization {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a tokenization error wrapping the analyzer failure.
    pub fn tokenization_with_source<S, E>(msg: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxedCause>,
    {
        SpellgramError::Tokenization {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Wrap an error raised while indexing the given dictionary file.
    pub fn dictionary_file<P: Into<PathBuf>>(path: P, source: SpellgramError) -> Self {
        SpellgramError::DictionaryFile {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a new invalid document error.
    pub fn invalid_document<S: Into<String>>(msg: S) -> Self {
        SpellgramError::InvalidDocument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellgramError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellgramError::Other(msg.into())
    }

    /// Whether this error came from the index backend.
    pub fn is_backend(&self) -> bool {
        match self {
            SpellgramError::Backend { .. } => true,
            SpellgramError::DictionaryFile { source, .. } => source.is_backend(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellgramError::backend("connection refused");
        assert_eq!(error.to_string(), "Backend error: connection refused");

        let error = SpellgramError::tokenization("stream closed");
        assert_eq!(error.to_string(), "Tokenization error: stream closed");

        let error = SpellgramError::invalid_config("batch_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: batch_size must be positive"
        );
    }

    #[test]
    fn test_backend_error_keeps_cause() {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer");
        let error = SpellgramError::backend_with_source("Unable to execute query", cause);

        assert!(error.is_backend());
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "reset by peer");
    }

    #[test]
    fn test_dictionary_file_error() {
        let inner = SpellgramError::backend("add failed");
        let error = SpellgramError::dictionary_file("dicts/en_US.txt", inner);

        assert!(error.is_backend());
        assert_eq!(
            error.to_string(),
            "Dictionary file error (dicts/en_US.txt): Backend error: add failed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpellgramError::from(io_error);

        match error {
            SpellgramError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
        assert!(!SpellgramError::other("x").is_backend());
    }

    #[test]
    fn test_tokenization_error_keeps_cause() {
        let error = SpellgramError::tokenization_with_source(
            "locale en_US",
            SpellgramError::other("reader closed"),
        );

        assert_eq!(error.to_string(), "Tokenization error: locale en_US");
        assert_eq!(error.source().unwrap().to_string(), "Error: reader closed");
        assert!(SpellgramError::tokenization("x").source().is_none());
    }

    #[test]
    fn test_anyhow_context_is_displayed_with_chain() {
        use anyhow::Context as _;

        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let error: SpellgramError = result
            .context("Unable to load spellgram.json")
            .unwrap_err()
            .into();

        assert!(matches!(error, SpellgramError::Anyhow(_)));
        assert_eq!(error.to_string(), "Unable to load spellgram.json: no such file");
    }
}
