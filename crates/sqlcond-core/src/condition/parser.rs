//! Condition string parser
//!
//! Parses condition strings like:
//! - `client_id = @clientID`
//! - `AND consumer_org_id = @orgID`
//! - `OR if_present r.audiences LIKE @audience`

use crate::ast::{Condition, LinkOperator, Modality};
use crate::error::{GrammarError, EXPECTED_THREE_PARTS};
use std::str::FromStr;

const AND_PREFIX: &str = "AND ";
const OR_PREFIX: &str = "OR ";
const IF_PRESENT_PREFIX: &str = "if_present ";

/// Parser for single condition clauses
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionParser;

impl ConditionParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a single condition string into a [`Condition`]
    ///
    /// Prefixes are matched exactly and in order: link operator first, then
    /// modality. The remainder is split on single spaces, so a doubled space
    /// produces an empty part and is rejected.
    pub fn parse_condition(&self, input: &str) -> Result<Condition, GrammarError> {
        let (link, rest) = if let Some(rest) = input.strip_prefix(AND_PREFIX) {
            (Some(LinkOperator::And), rest)
        } else if let Some(rest) = input.strip_prefix(OR_PREFIX) {
            (Some(LinkOperator::Or), rest)
        } else {
            (None, input)
        };

        let (modality, rest) = match rest.strip_prefix(IF_PRESENT_PREFIX) {
            Some(rest) => (Modality::IfPresent, rest),
            None => (Modality::Must, rest),
        };

        let parts: Vec<&str> = rest.split(' ').collect();
        let [column, operator, arg_name] = parts.as_slice() else {
            return Err(GrammarError::new(EXPECTED_THREE_PARTS, input));
        };

        log::trace!(
            "parsed condition: link={:?} modality={} column={} operator={} arg={}",
            link,
            modality,
            column,
            operator,
            arg_name
        );

        Ok(Condition {
            modality,
            link,
            column: column.to_string(),
            operator: operator.to_string(),
            arg_name: arg_name.to_string(),
        })
    }
}

impl FromStr for Condition {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionParser::new().parse_condition(s)
    }
}
