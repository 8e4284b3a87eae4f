//! Error types for the wrapper generator.
//!
//! Generation itself is infallible; these errors come from loading
//! declarations, reading options, and writing output.

use thiserror::Error;

/// Errors that can occur around code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse type declarations
    #[error("Failed to parse declarations: {0}")]
    ParseError(String),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
