//! Loader options

use crate::configuration::DEFAULT_TAG;
use serde::{Deserialize, Serialize};

/// Options applied when loading a configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Tags used when a lookup requests none
    pub default_tags: Vec<String>,

    /// Fail on unknown document fields instead of logging a warning
    pub strict_fields: bool,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self {
            default_tags: vec![DEFAULT_TAG.to_string()],
            strict_fields: false,
        }
    }

    /// Set the tags used when a lookup requests none
    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Enable strict field validation
    pub fn strict_fields(mut self, strict: bool) -> Self {
        self.strict_fields = strict;
        self
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self::new()
    }
}
