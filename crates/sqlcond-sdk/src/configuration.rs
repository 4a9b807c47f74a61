//! Operation configuration container
//!
//! A [`Configuration`] holds every operation with its tag-selected variants.
//! Each variant's tokens are parsed once by [`Configuration::parse`]; after
//! that the configuration is read-only and can be shared across threads.

use crate::error::{Result, SdkError};
use sqlcond_core::{Expression, FilterArgs, RawToken};
use sqlcond_parser::{ConfigDocument, TokenParser};
use std::fmt;

/// Tag requested when a lookup names none
pub const DEFAULT_TAG: &str = "default";

/// One tag-selected variant of an operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationVariant {
    joins: Vec<String>,
    condition: Option<Vec<RawToken>>,
    parsed: Option<Expression>,
}

impl OperationVariant {
    /// Create a variant from its condition tokens
    pub fn new(condition: Vec<RawToken>) -> Self {
        Self {
            joins: Vec::new(),
            condition: Some(condition),
            parsed: None,
        }
    }

    /// Create a variant that declares no condition
    ///
    /// Such a variant fails [`Configuration::parse`].
    pub fn without_condition() -> Self {
        Self::default()
    }

    /// Set the join clauses passed through to the caller
    pub fn with_joins<I, S>(mut self, joins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.joins = joins.into_iter().map(Into::into).collect();
        self
    }

    pub fn joins(&self) -> &[String] {
        &self.joins
    }

    /// The raw tokens, as declared
    pub fn condition(&self) -> Option<&[RawToken]> {
        self.condition.as_deref()
    }

    /// The parsed expression; `None` until the configuration is parsed
    pub fn expression(&self) -> Option<&Expression> {
        self.parsed.as_ref()
    }

    /// Render this variant's condition
    pub fn render(&self, args: &FilterArgs) -> Result<String> {
        let expr = self.parsed.as_ref().ok_or_else(|| {
            SdkError::ConfigError("variant rendered before the configuration was parsed".to_string())
        })?;
        Ok(expr.render(args)?)
    }
}

/// Variants of one operation, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationConfig {
    variants: Vec<(String, OperationVariant)>,
}

impl OperationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant under a space separated tag set
    pub fn with_variant(mut self, tags: impl Into<String>, variant: OperationVariant) -> Self {
        self.variants.push((tags.into(), variant));
        self
    }

    /// Tag-set keys and their variants, in declaration order
    pub fn variants(&self) -> impl Iterator<Item = (&str, &OperationVariant)> {
        self.variants.iter().map(|(tags, v)| (tags.as_str(), v))
    }

    /// First variant, in declaration order, whose tag set shares a tag with
    /// `requested`
    pub fn find_variant<S: AsRef<str>>(&self, requested: &[S]) -> Option<&OperationVariant> {
        self.variants
            .iter()
            .find(|(key, _)| {
                key.split_whitespace()
                    .any(|tag| requested.iter().any(|r| r.as_ref() == tag))
            })
            .map(|(_, variant)| variant)
    }
}

/// Result of rendering an operation for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCondition {
    /// Join clauses declared by the selected variant
    pub joins: Vec<String>,
    /// SQL condition fragment
    pub sql: String,
}

/// Central container holding all operations with their conditions
///
/// Operation names are not deduplicated. When a name is declared twice, the
/// first declaration is the one lookups find.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    version: u32,
    operations: Vec<(String, OperationConfig)>,
    default_tags: Vec<String>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new(version: u32) -> Self {
        Self {
            version,
            operations: Vec::new(),
            default_tags: vec![DEFAULT_TAG.to_string()],
        }
    }

    /// Build an unparsed configuration from a loaded document
    pub fn from_document(doc: ConfigDocument) -> Self {
        let mut config = Self::new(doc.version);
        for op in doc.operations {
            let mut op_config = OperationConfig::new();
            for variant in op.variants {
                op_config.variants.push((
                    variant.tags,
                    OperationVariant {
                        joins: variant.joins,
                        condition: variant.condition,
                        parsed: None,
                    },
                ));
            }
            config.operations.push((op.name, op_config));
        }
        config
    }

    /// Add an operation. Lookups by name return the first operation declared
    /// under that name.
    pub fn with_operation(mut self, name: impl Into<String>, op: OperationConfig) -> Self {
        self.operations.push((name.into(), op));
        self
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

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Operation names, in declaration order
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|(name, _)| name.as_str())
    }

    pub fn operation(&self, name: &str) -> Option<&OperationConfig> {
        self.operations
            .iter()
            .find(|(op_name, _)| op_name == name)
            .map(|(_, op)| op)
    }

    /// Parse every variant's tokens and store the resulting expressions
    ///
    /// Either every variant is parsed or none is updated. Calling this again
    /// re-parses and produces identical expressions.
    pub fn parse(&mut self) -> Result<()> {
        let mut parsed = Vec::new();

        for (op_name, op_config) in &self.operations {
            for (tags, variant) in &op_config.variants {
                let tokens = variant.condition.as_deref().ok_or_else(|| {
                    SdkError::ConfigError(format!(
                        "Invalid (nil) tokens for SQL operation '{}' variant '{}'",
                        op_name, tags
                    ))
                })?;

                let expr = TokenParser::parse(tokens).map_err(|source| SdkError::ParseError {
                    operation: op_name.clone(),
                    variant: tags.clone(),
                    source,
                })?;

                tracing::trace!(
                    operation = %op_name,
                    variant = %tags,
                    elements = expr.len(),
                    "parsed variant condition"
                );
                parsed.push(expr);
            }
        }

        let variants = self
            .operations
            .iter_mut()
            .flat_map(|(_, op)| op.variants.iter_mut());
        for ((_, variant), expr) in variants.zip(parsed) {
            variant.parsed = Some(expr);
        }

        Ok(())
    }

    /// Select the variant of `op_name` matching the requested tags
    ///
    /// With no tags requested, the default tags are used. Variants are
    /// scanned in declaration order and the first one sharing a tag wins.
    pub fn get_operation(&self, op_name: &str, tags: Option<&[&str]>) -> Result<&OperationVariant> {
        let op = self
            .operation(op_name)
            .ok_or_else(|| SdkError::NotFound(format!("operation '{}'", op_name)))?;

        let found = match tags {
            Some(tags) => op.find_variant(tags),
            None => op.find_variant(self.default_tags.as_slice()),
        };

        found.ok_or_else(|| {
            let requested = match tags {
                Some(tags) => tags.join(" "),
                None => self.default_tags.join(" "),
            };
            tracing::debug!(operation = %op_name, tags = %requested, "no variant matches");
            SdkError::NotFound(format!(
                "no variant of operation '{}' matches tags [{}]",
                op_name, requested
            ))
        })
    }

    /// Resolve a variant and render its condition
    pub fn render(
        &self,
        op_name: &str,
        tags: Option<&[&str]>,
        args: &FilterArgs,
    ) -> Result<RenderedCondition> {
        let variant = self.get_operation(op_name, tags)?;
        let sql = variant.render(args)?;

        Ok(RenderedCondition {
            joins: variant.joins.clone(),
            sql,
        })
    }

    /// Debug description listing every operation, tag set and parsed condition
    pub fn describe(&self) -> String {
        let mut out = String::from("Operations:\n");

        for (op_name, op_config) in &self.operations {
            out.push_str(&format!("\n {}:\n", op_name));
            for (tags, variant) in &op_config.variants {
                out.push_str(&format!("   tags : {}\n", tags));
                if !variant.joins.is_empty() {
                    out.push_str(&format!("   joins: {}\n", variant.joins.join(", ")));
                }
                match &variant.parsed {
                    Some(expr) => {
                        out.push_str("   cond :\n");
                        for element in expr {
                            out.push_str(&format!("     {}\n", element));
                        }
                    }
                    None => out.push_str("   cond : <not parsed>\n"),
                }
                out.push('\n');
            }
        }

        out
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
