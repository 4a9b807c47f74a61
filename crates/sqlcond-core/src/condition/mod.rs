//! Condition Parsing Module
//!
//! This module parses a single condition clause of a variant's token list.
//!
//! # Syntax
//!
//! ```yaml
//! condition:
//!   - "client_id = @clientID"
//!   - "AND consumer_org_id = @orgID"
//!   - "OR if_present r.audiences LIKE @audience"
//! ```
//!
//! A clause is an optional link operator (`AND ` / `OR `), an optional
//! `if_present ` modality, then exactly three space separated parts:
//! column name, operator and named argument. Column and operator are opaque
//! and passed through to the SQL output as written.

mod parser;

pub use parser::ConditionParser;
