//! SQL rendering
//!
//! Rendering is a single left-to-right pass over an [`Expression`]. The only
//! state carried between elements is whether a condition has already been
//! emitted; it decides whether a condition's link operator is written.
//! Separators are plain text and never reset that state.

use crate::args::FilterArgs;
use crate::ast::{Condition, Expression, ExpressionElement, LinkOperator, Modality, Separator};
use crate::error::{RenderError, Result};

/// State threaded through a render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderHint {
    /// At least one condition has been emitted so far
    pub expr_not_empty: bool,
}

/// Render an expression element to SQL text
pub trait ToSql {
    fn to_sql(&self, hint: RenderHint, args: &FilterArgs) -> Result<String>;
}

impl ToSql for Separator {
    fn to_sql(&self, _hint: RenderHint, _args: &FilterArgs) -> Result<String> {
        Ok(self.as_str().to_string())
    }
}

impl ToSql for LinkOperator {
    fn to_sql(&self, _hint: RenderHint, _args: &FilterArgs) -> Result<String> {
        Ok(format!(" {} ", self))
    }
}

impl ToSql for Condition {
    /// Renders to an empty string when the condition is `if_present` and its
    /// argument is missing.
    fn to_sql(&self, hint: RenderHint, args: &FilterArgs) -> Result<String> {
        let key = self
            .arg_key()
            .ok_or_else(|| RenderError::InvalidArgName(self.arg_name.clone()))?;

        if self.modality == Modality::IfPresent && !args.contains(key) {
            log::trace!("skipping condition on {}: argument '{}' absent", self.column, key);
            return Ok(String::new());
        }

        let mut sql = String::new();
        if let Some(link) = self.link {
            if hint.expr_not_empty {
                sql.push_str(&format!(" {} ", link));
            }
        }
        sql.push_str(&self.clause());
        Ok(sql)
    }
}

impl ToSql for ExpressionElement {
    fn to_sql(&self, hint: RenderHint, args: &FilterArgs) -> Result<String> {
        match self {
            ExpressionElement::Condition(c) => c.to_sql(hint, args),
            ExpressionElement::Separator(s) => s.to_sql(hint, args),
            ExpressionElement::Link(op) => op.to_sql(hint, args),
        }
    }
}

impl ToSql for Expression {
    /// Renders the elements in order, starting from the given hint
    fn to_sql(&self, mut hint: RenderHint, args: &FilterArgs) -> Result<String> {
        let mut sql = String::new();

        for element in self {
            let s = element.to_sql(hint, args)?;
            if s.is_empty() {
                continue;
            }
            sql.push_str(&s);
            if element.is_condition() {
                hint.expr_not_empty = true;
            }
        }

        Ok(sql)
    }
}

impl Expression {
    /// Render this expression with the given arguments
    pub fn render(&self, args: &FilterArgs) -> Result<String> {
        ToSql::to_sql(self, RenderHint::default(), args)
    }
}

/// Render an expression to a SQL fragment
///
/// Fails with [`RenderError::MissingArguments`] when no argument map is
/// supplied, whatever the expression contains.
pub fn render(expr: &Expression, args: Option<&FilterArgs>) -> Result<String> {
    let args = args.ok_or(RenderError::MissingArguments)?;
    expr.render(args)
}
