//! Operation document parser
//!
//! Reads a YAML document of the form:
//!
//! ```yaml
//! version: 1
//! operations:
//!   get-resources:
//!     variants:
//!       "default":
//!         joins: []
//!         condition:
//!           - "("
//!           - "if_present client_id = @clientID"
//!           - "OR if_present consumer_org_id = @orgID"
//!           - ")"
//! ```
//!
//! into a [`ConfigDocument`]. Operations and variants keep their declaration
//! order. Token lists are converted but not parsed; a variant without a
//! `condition` keeps `None` so the caller can report it by name. A missing or
//! null `operations` or `variants` reads as empty.

use crate::error::{ParseError, Result};
use crate::token_parser::TokenParser;
use crate::yaml_parser::YamlParser;
use serde_yaml::Value as YamlValue;
use sqlcond_core::RawToken;

const DOCUMENT_FIELDS: &[&str] = &["version", "operations"];
const OPERATION_FIELDS: &[&str] = &["variants"];
const VARIANT_FIELDS: &[&str] = &["joins", "condition"];

/// A whole configuration document, before token parsing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    pub version: u32,
    pub operations: Vec<OperationDocument>,
}

/// One operation and its variants, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDocument {
    pub name: String,
    pub variants: Vec<VariantDocument>,
}

/// One tag-selected variant
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDocument {
    /// Space separated tag set, as written in the document
    pub tags: String,
    pub joins: Vec<String>,
    /// `None` when the variant declares no condition
    pub condition: Option<Vec<RawToken>>,
}

/// Parser for operation documents
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    strict_fields: bool,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on unknown fields instead of logging a warning
    pub fn strict_fields(mut self, strict: bool) -> Self {
        self.strict_fields = strict;
        self
    }

    /// Parse a document from a YAML string
    pub fn parse(&self, yaml_str: &str) -> Result<ConfigDocument> {
        let yaml = YamlParser::parse(yaml_str)?;
        self.parse_from_yaml(&yaml)
    }

    /// Parse a document from raw YAML bytes
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ConfigDocument> {
        let yaml = YamlParser::parse_bytes(bytes)?;
        self.parse_from_yaml(&yaml)
    }

    /// Parse a document from a YAML value
    pub fn parse_from_yaml(&self, yaml: &YamlValue) -> Result<ConfigDocument> {
        if !yaml.is_mapping() {
            return Err(ParseError::InvalidValue {
                field: "document".to_string(),
                message: format!("expected a mapping, got {}", YamlParser::kind_name(yaml)),
            });
        }
        YamlParser::check_fields(yaml, DOCUMENT_FIELDS, "document", self.strict_fields)?;

        let version = YamlParser::get_optional_u32(yaml, "version")?.unwrap_or(0);
        let operations_obj = YamlParser::get_optional_mapping(yaml, "operations")?;

        let mut operations = Vec::new();
        for (key, value) in operations_obj.into_iter().flatten() {
            let name = YamlParser::key_as_string(key, "operations")?;
            operations.push(self.parse_operation(name, value)?);
        }

        log::debug!(
            "parsed configuration document version {} with {} operations",
            version,
            operations.len()
        );

        Ok(ConfigDocument {
            version,
            operations,
        })
    }

    fn parse_operation(&self, name: String, yaml: &YamlValue) -> Result<OperationDocument> {
        let context = format!("operations.{}", name);
        if !yaml.is_null() && !yaml.is_mapping() {
            return Err(ParseError::InvalidValue {
                field: context,
                message: format!("expected a mapping, got {}", YamlParser::kind_name(yaml)),
            });
        }
        YamlParser::check_fields(yaml, OPERATION_FIELDS, &context, self.strict_fields)?;

        let variants_obj = YamlParser::get_optional_mapping(yaml, "variants")
            .map_err(|e| Self::in_context(e, &context))?;

        let mut variants = Vec::new();
        for (key, value) in variants_obj.into_iter().flatten() {
            let tags = YamlParser::key_as_string(key, &context)?;
            let variant_context = format!("{}.variants.{}", context, tags);
            let variant = self
                .parse_variant(tags.clone(), value, &variant_context)
                .map_err(|source| match source {
                    ParseError::UnhandledToken { .. } => ParseError::Variant {
                        operation: name.clone(),
                        variant: tags,
                        source: Box::new(source),
                    },
                    other => other,
                })?;
            variants.push(variant);
        }

        Ok(OperationDocument { name, variants })
    }

    fn parse_variant(&self, tags: String, yaml: &YamlValue, context: &str) -> Result<VariantDocument> {
        // A bare `"default":` entry declares the variant without any content
        if yaml.is_null() {
            return Ok(VariantDocument {
                tags,
                joins: Vec::new(),
                condition: None,
            });
        }

        if !yaml.is_mapping() {
            return Err(ParseError::InvalidValue {
                field: context.to_string(),
                message: format!("expected a mapping, got {}", YamlParser::kind_name(yaml)),
            });
        }
        YamlParser::check_fields(yaml, VARIANT_FIELDS, context, self.strict_fields)?;

        let joins = YamlParser::get_optional_string_list(yaml, "joins")
            .map_err(|e| Self::in_context(e, context))?;

        let condition = match yaml.get("condition") {
            None | Some(YamlValue::Null) => None,
            Some(YamlValue::Sequence(seq)) => Some(TokenParser::tokens_from_yaml(seq)?),
            Some(other) => {
                return Err(ParseError::InvalidValue {
                    field: format!("{}.condition", context),
                    message: format!("expected a token list, got {}", YamlParser::kind_name(other)),
                })
            }
        };

        Ok(VariantDocument {
            tags,
            joins,
            condition,
        })
    }

    /// Prefix the field of a field-level error with its location in the document
    fn in_context(error: ParseError, context: &str) -> ParseError {
        match error {
            ParseError::InvalidValue { field, message } => ParseError::InvalidValue {
                field: format!("{}.{}", context, field),
                message,
            },
            other => other,
        }
    }
}
