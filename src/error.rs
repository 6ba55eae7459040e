//! Error types for the Ordanet library.
//!
//! Only run-level failures are represented here: unreadable input, unwritable
//! output, a bad configuration file. Records that fail to match an expected
//! pattern are never errors; the extractors return `None` for them and the
//! record is left out.
//!
//! # Examples
//!
//! ```
//! use ordanet::error::{OrdanetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrdanetError::config("missing input path"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Ordanet operations.
#[derive(Error, Debug)]
pub enum OrdanetError {
    /// I/O errors (reading the dump, writing the synonym file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (bad config file, missing paths)
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis-related errors (char filter construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with OrdanetError.
pub type Result<T> = std::result::Result<T, OrdanetError>;

impl OrdanetError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        OrdanetError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrdanetError::Analysis(msg.into())
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io_at<P: AsRef<std::path::Path>>(path: P, err: io::Error) -> Self {
        OrdanetError::Io(io::Error::new(
            err.kind(),
            format!("{}: {}", path.as_ref().display(), err),
        ))
    }
}
