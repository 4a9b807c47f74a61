//! SDK error types

use sqlcond_parser::ParseError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// The document could not be read as an operation configuration
    #[error("Load error: {0}")]
    LoadError(#[source] ParseError),

    /// A declared variant has no token definition
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A variant's tokens failed to parse
    #[error("Parse error in operation '{operation}' variant '{variant}': {source}")]
    ParseError {
        operation: String,
        variant: String,
        #[source]
        source: ParseError,
    },

    /// Unknown operation, or no variant matching the requested tags
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rendering failed
    #[error("Render error: {0}")]
    RenderError(#[from] sqlcond_core::RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ParseError> for SdkError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Variant {
                operation,
                variant,
                source,
            } => SdkError::ParseError {
                operation,
                variant,
                source: *source,
            },
            other => SdkError::LoadError(other),
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
