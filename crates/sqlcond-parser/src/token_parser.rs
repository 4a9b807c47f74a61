//! Token parser
//!
//! Turns a variant's nested token list into a flat [`Expression`]. Nested
//! lists are parsed recursively and spliced in place; grouping survives only
//! through the `(` / `)` tokens written in the configuration.
//!
//! Errors locate the failing token with a [`TokenPath`], one index per
//! nesting level.

use crate::error::{ParseError, Result, TokenPath};
use crate::yaml_parser::YamlParser;
use serde_yaml::Value as YamlValue;
use sqlcond_core::ast::{Expression, ExpressionElement, LinkOperator, RawToken, Separator};
use sqlcond_core::ConditionParser;

/// Token parser
pub struct TokenParser;

impl TokenParser {
    /// Parse a token list into an expression
    pub fn parse(tokens: &[RawToken]) -> Result<Expression> {
        let condition_parser = ConditionParser::new();
        let mut expr = Expression::default();
        Self::parse_into(&condition_parser, tokens, &TokenPath::new(), &mut expr)?;
        Ok(expr)
    }

    fn parse_into(
        condition_parser: &ConditionParser,
        tokens: &[RawToken],
        parent: &TokenPath,
        expr: &mut Expression,
    ) -> Result<()> {
        for (index, token) in tokens.iter().enumerate() {
            let path = parent.child(index);
            match token {
                RawToken::Text(s) => {
                    expr.push(Self::parse_text(condition_parser, path, s)?);
                }
                RawToken::List(nested) => {
                    log::trace!("splicing nested token list #{} ({} tokens)", path, nested.len());
                    Self::parse_into(condition_parser, nested, &path, expr)?;
                }
            }
        }
        Ok(())
    }

    /// Classify a single string token
    fn parse_text(
        condition_parser: &ConditionParser,
        path: TokenPath,
        s: &str,
    ) -> Result<ExpressionElement> {
        if let Some(separator) = Separator::from_token(s) {
            return Ok(separator.into());
        }

        if let Some(op) = LinkOperator::from_keyword(s) {
            return Ok(op.into());
        }

        condition_parser
            .parse_condition(s)
            .map(ExpressionElement::Condition)
            .map_err(|source| ParseError::Grammar {
                path,
                token: s.to_string(),
                source,
            })
    }

    /// Convert a YAML token sequence into raw tokens
    ///
    /// Only strings and nested sequences are tokens; anything else is
    /// rejected with [`ParseError::UnhandledToken`].
    pub fn tokens_from_yaml(seq: &[YamlValue]) -> Result<Vec<RawToken>> {
        Self::tokens_from_yaml_at(seq, &TokenPath::new())
    }

    fn tokens_from_yaml_at(seq: &[YamlValue], parent: &TokenPath) -> Result<Vec<RawToken>> {
        seq.iter()
            .enumerate()
            .map(|(index, value)| match value {
                YamlValue::String(s) => Ok(RawToken::Text(s.clone())),
                YamlValue::Sequence(nested) => {
                    Self::tokens_from_yaml_at(nested, &parent.child(index)).map(RawToken::List)
                }
                other => Err(ParseError::UnhandledToken {
                    path: parent.child(index),
                    kind: YamlParser::kind_name(other).to_string(),
                }),
            })
            .collect()
    }
}
