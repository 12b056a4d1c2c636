//! Error types for the morphemizer library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`MorphemizerError`] enum. Only dictionary loading and registry
//! construction are expected to fail in normal use; segmentation degrades to
//! empty results instead of erroring (see [`CachedMorphemizer::segment`]).
//!
//! [`CachedMorphemizer::segment`]: crate::analysis::CachedMorphemizer::segment
//!
//! # Examples
//!
//! ```
//! use morphemizer::error::{MorphemizerError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(MorphemizerError::dictionary("ru_RU.aff not found"))
//! }
//!
//! assert_eq!(
//!     load().unwrap_err().to_string(),
//!     "Dictionary error: ru_RU.aff not found"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for morphemizer operations.
#[derive(Error, Debug)]
pub enum MorphemizerError {
    /// I/O errors (dictionary files, subprocess pipes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary loading or parsing errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Analysis-related errors (segmentation, tagging, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Failures reported by an external analyzer process
    #[error("External tool error: {0}")]
    ExternalTool(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry construction errors
    #[error("Registry error: {0}")]
    Registry(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with MorphemizerError.
pub type Result<T> = std::result::Result<T, MorphemizerError>;

impl MorphemizerError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        MorphemizerError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MorphemizerError::Analysis(msg.into())
    }

    /// Create a new external tool error.
    pub fn external_tool<S: Into<String>>(msg: S) -> Self {
        MorphemizerError::ExternalTool(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MorphemizerError::Config(msg.into())
    }

    /// Create a new registry error.
    pub fn registry<S: Into<String>>(msg: S) -> Self {
        MorphemizerError::Registry(msg.into())
    }
}
