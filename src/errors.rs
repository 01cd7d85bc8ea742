/*!
 * Error types for the alartex application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when parsing a script range such as `U+0C80-U+0CFF`
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptRangeError {
    /// The range is not two code points separated by `-`
    #[error("Invalid script range '{0}', expected the form U+0C80-U+0CFF")]
    InvalidFormat(String),

    /// One side of the range is not a valid Unicode scalar value
    #[error("Invalid code point: {0}")]
    InvalidCodePoint(String),

    /// The first code point comes after the last one
    #[error("Script range is inverted: U+{first:04X} > U+{last:04X}")]
    Inverted {
        /// First code point
        first: u32,
        /// Last code point
        last: u32,
    },
}

/// Errors that can occur while reading the dictionary corpus
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The YAML document does not match the expected entry layout
    #[error("Failed to parse dictionary YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the dictionary loader
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error in the configured script range
    #[error("Script range error: {0}")]
    ScriptRange(#[from] ScriptRangeError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
