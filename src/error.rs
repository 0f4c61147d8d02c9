//! Error types for sanitext
//!
//! Only configuration and input acquisition can fail. Detection,
//! normalization and sanitization are total.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the caller before any text is processed
#[derive(Debug, Error)]
pub enum SanitextError {
    /// The extra allowed-characters file could not be read
    #[error("failed to read allowed characters from {}: {source}", .path.display())]
    ExtraFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read or parsed
    #[error("failed to load config from {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Reading the input text failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// No text was provided
    #[error("no text provided")]
    EmptyInput,
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SanitextError>;
