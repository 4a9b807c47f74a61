//! Abstract Syntax Tree (AST) definitions for sqlcond
//!
//! This module contains:
//! - Raw tokens, the unparsed form read from configuration
//! - Condition leaves with their modality and link operator
//! - Expressions, the flat ordered sequence produced by the token parser

pub mod condition;
pub mod expression;
pub mod token;

pub use condition::{Condition, LinkOperator, Modality};
pub use expression::{Expression, ExpressionElement, Separator};
pub use token::RawToken;
