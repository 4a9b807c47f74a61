//! Condition leaf nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a condition is always rendered or gated on its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Always rendered
    #[default]
    Must,
    /// Rendered only when the named argument is supplied
    IfPresent,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Must => "must",
            Modality::IfPresent => "if_present",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connective between rendered conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkOperator {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl LinkOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkOperator::And => "AND",
            LinkOperator::Or => "OR",
        }
    }

    /// Recognize a bare `AND` / `OR` keyword, ignoring surrounding whitespace
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim() {
            "AND" => Some(LinkOperator::And),
            "OR" => Some(LinkOperator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LinkOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `column operator @arg` clause
///
/// The argument name is expected to be a named parameter carrying a one
/// character prefix (e.g. `@clientID`); presence checks strip that prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Whether the condition is optional or mandatory
    pub modality: Modality,

    /// How the condition is chained to a previously rendered condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkOperator>,

    /// Column tested by the condition
    pub column: String,

    /// SQL operator (`=`, `LIKE`, ...); must not contain spaces
    pub operator: String,

    /// Named argument, including its prefix
    pub arg_name: String,
}

impl Condition {
    /// Create a mandatory condition with no link operator
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        arg_name: impl Into<String>,
    ) -> Self {
        Self {
            modality: Modality::Must,
            link: None,
            column: column.into(),
            operator: operator.into(),
            arg_name: arg_name.into(),
        }
    }

    /// Set the link operator
    pub fn with_link(mut self, link: LinkOperator) -> Self {
        self.link = Some(link);
        self
    }

    /// Make the condition optional
    pub fn if_present(mut self) -> Self {
        self.modality = Modality::IfPresent;
        self
    }

    /// The argument key looked up in the filter arguments, i.e. the argument
    /// name without its prefix. `None` when the name is too short to carry
    /// both.
    pub fn arg_key(&self) -> Option<&str> {
        let mut chars = self.arg_name.char_indices();
        chars.next()?;
        let (start, _) = chars.next()?;
        Some(&self.arg_name[start..])
    }

    /// The clause body without any link operator
    pub fn clause(&self) -> String {
        format!("{} {} {}", self.column, self.operator, self.arg_name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(link) = self.link {
            write!(f, "{} ", link)?;
        }
        write!(
            f,
            "{} {} {} {}",
            self.modality, self.column, self.operator, self.arg_name
        )
    }
}
