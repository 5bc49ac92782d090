//! Error types for the Sentix library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`SentixError`].
//!
//! # Examples
//!
//! ```
//! use sentix::error::{Result, SentixError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentixError::invalid_input("Input text is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentix operations.
#[derive(Error, Debug)]
pub enum SentixError {
    /// I/O errors (file operations, sockets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Failures raised by a sentiment scorer
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// Failures raised by a language detector
    #[error("Detection error: {0}")]
    Detection(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before or during analysis
    #[error("Invalid input: {0}")]
    InvalidInput(String),

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

/// Result type alias for operations that may fail with SentixError.
pub type Result<T> = std::result::Result<T, SentixError>;

impl SentixError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentixError::Analysis(msg.into())
    }

    /// Create a new scoring error.
    pub fn scoring<S: Into<String>>(msg: S) -> Self {
        SentixError::Scoring(msg.into())
    }

    /// Create a new detection error.
    pub fn detection<S: Into<String>>(msg: S) -> Self {
        SentixError::Detection(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SentixError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SentixError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentixError::Other(msg.into())
    }
}
