//! Error types for sqlcond Core

use thiserror::Error;

/// Reason reported when a condition clause does not have three parts
pub const EXPECTED_THREE_PARTS: &str = "expected columnName operator namedArg";

/// A condition clause that does not follow the `column operator @arg` grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed condition '{input}': {reason}")]
pub struct GrammarError {
    /// Why the clause was rejected
    pub reason: String,
    /// The clause as written in the configuration
    pub input: String,
}

impl GrammarError {
    pub fn new(reason: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            input: input.into(),
        }
    }
}

/// Render error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The caller passed no argument map at all
    #[error("Invalid (nil) argument map")]
    MissingArguments,

    /// The condition's argument name cannot carry a prefix plus a name
    #[error("Condition argument name invalid (too short): '{0}'")]
    InvalidArgName(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
