//! Expression AST nodes

use super::condition::{Condition, LinkOperator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal grouping character, passed through to the SQL output unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Open => "(",
            Separator::Close => ")",
        }
    }

    /// Recognize an exact `(` or `)` token
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "(" => Some(Separator::Open),
            ")" => Some(Separator::Close),
            _ => None,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a parsed expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionElement {
    /// Condition leaf
    Condition(Condition),
    /// Parenthesis
    Separator(Separator),
    /// Bare `AND` / `OR` appearing outside a condition
    Link(LinkOperator),
}

impl ExpressionElement {
    /// Returns true if this element is a condition leaf
    pub fn is_condition(&self) -> bool {
        matches!(self, ExpressionElement::Condition(_))
    }
}

impl From<Condition> for ExpressionElement {
    fn from(c: Condition) -> Self {
        ExpressionElement::Condition(c)
    }
}

impl From<Separator> for ExpressionElement {
    fn from(s: Separator) -> Self {
        ExpressionElement::Separator(s)
    }
}

impl From<LinkOperator> for ExpressionElement {
    fn from(op: LinkOperator) -> Self {
        ExpressionElement::Link(op)
    }
}

impl fmt::Display for ExpressionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionElement::Condition(c) => write!(f, "{}", c),
            ExpressionElement::Separator(s) => write!(f, "{}", s),
            ExpressionElement::Link(op) => write!(f, "{}", op),
        }
    }
}

/// Flat, ordered sequence of expression elements
///
/// Grouping is expressed only through [`Separator`] elements; nested token
/// lists are spliced in place by the token parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    elements: Vec<ExpressionElement>,
}

impl Expression {
    pub fn new(elements: Vec<ExpressionElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[ExpressionElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpressionElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element
    pub fn push(&mut self, element: impl Into<ExpressionElement>) {
        self.elements.push(element.into());
    }

    /// Splice another expression's elements at the end, preserving order
    pub fn splice(&mut self, other: Expression) {
        self.elements.extend(other.elements);
    }

    /// All condition leaves, in order
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.elements.iter().filter_map(|e| match e {
            ExpressionElement::Condition(c) => Some(c),
            _ => None,
        })
    }
}

impl FromIterator<ExpressionElement> for Expression {
    fn from_iter<T: IntoIterator<Item = ExpressionElement>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a ExpressionElement;
    type IntoIter = std::slice::Iter<'a, ExpressionElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            writeln!(f, "{}", element)?;
        }
        Ok(())
    }
}
