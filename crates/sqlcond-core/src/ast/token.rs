//! Raw configuration tokens

use serde::{Deserialize, Serialize};
use std::fmt;

/// One unparsed token of a variant's condition definition
///
/// A token is either a string (a condition clause, a bare link operator or a
/// parenthesis) or a nested list of tokens. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawToken {
    /// String token (e.g., "AND if_present client_id = @clientID")
    Text(String),
    /// Nested token list, spliced in place when parsed
    List(Vec<RawToken>),
}

impl RawToken {
    /// Create a text token
    pub fn text(s: impl Into<String>) -> Self {
        RawToken::Text(s.into())
    }

    /// Create a nested list token
    pub fn list(tokens: Vec<RawToken>) -> Self {
        RawToken::List(tokens)
    }

    /// Build a token list from plain strings
    pub fn texts<I, S>(items: I) -> Vec<RawToken>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        items.into_iter().map(RawToken::text).collect()
    }
}

impl From<&str> for RawToken {
    fn from(s: &str) -> Self {
        RawToken::Text(s.to_string())
    }
}

impl From<String> for RawToken {
    fn from(s: String) -> Self {
        RawToken::Text(s)
    }
}

impl From<Vec<RawToken>> for RawToken {
    fn from(tokens: Vec<RawToken>) -> Self {
        RawToken::List(tokens)
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::Text(s) => write!(f, "{:?}", s),
            RawToken::List(tokens) => {
                write!(f, "[")?;
                for (idx, token) in tokens.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", token)?;
                }
                write!(f, "]")
            }
        }
    }
}
