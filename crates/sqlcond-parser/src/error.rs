//! Parser error types

use sqlcond_core::GrammarError;
use std::fmt;
use thiserror::Error;

/// Position of a token inside a variant's condition
///
/// One index per nesting level, outermost first, displayed as `1.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPath(Vec<usize>);

impl TokenPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into the token at `index`
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn indexes(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for TokenPath {
    fn from(indexes: Vec<usize>) -> Self {
        Self(indexes)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A condition clause failed the grammar
    #[error("Token #{path} <{token}>: {source}")]
    Grammar {
        path: TokenPath,
        token: String,
        #[source]
        source: GrammarError,
    },

    /// A token that is neither a string nor a list
    #[error("Token #{path}: unhandled token type {kind}")]
    UnhandledToken { path: TokenPath, kind: String },

    /// A token error located in the document
    #[error("operation '{operation}' variant '{variant}': {source}")]
    Variant {
        operation: String,
        variant: String,
        #[source]
        source: Box<ParseError>,
    },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
