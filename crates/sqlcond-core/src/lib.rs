//! sqlcond Core - Core types and renderer for tag-variant SQL conditions
//!
//! This crate provides the fundamental types used across the sqlcond workspace:
//! - Raw token and expression definitions
//! - The single-clause condition grammar
//! - The conditional SQL renderer
//! - Error types

pub mod args;
pub mod ast;
pub mod condition;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use args::FilterArgs;
pub use ast::{
    Condition, Expression, ExpressionElement, LinkOperator, Modality, RawToken, Separator,
};
pub use condition::ConditionParser;
pub use error::{GrammarError, RenderError};
pub use render::{render, RenderHint, ToSql};
