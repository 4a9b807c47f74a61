//! YAML Parser
//!
//! Provides utilities for reading operation documents out of YAML values.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Parse raw YAML bytes into a YAML value
    pub fn parse_bytes(bytes: &[u8]) -> Result<YamlValue> {
        Ok(serde_yaml::from_slice(bytes)?)
    }

    /// Get an optional unsigned integer field from YAML object
    pub fn get_optional_u32(obj: &YamlValue, field: &str) -> Result<Option<u32>> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Ok(None),
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: field.to_string(),
                    message: format!("expected an unsigned integer, got {}", Self::kind_name(v)),
                }),
        }
    }

    /// Get an optional mapping field from YAML object
    ///
    /// A missing or null field reads as `None`.
    pub fn get_optional_mapping<'a>(
        obj: &'a YamlValue,
        field: &str,
    ) -> Result<Option<&'a serde_yaml::Mapping>> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Ok(None),
            Some(value) => value.as_mapping().map(Some).ok_or_else(|| ParseError::InvalidValue {
                field: field.to_string(),
                message: format!("expected a mapping, got {}", Self::kind_name(value)),
            }),
        }
    }

    /// Get an optional list of strings from YAML object
    pub fn get_optional_string_list(obj: &YamlValue, field: &str) -> Result<Vec<String>> {
        let Some(value) = obj.get(field) else {
            return Ok(Vec::new());
        };
        if value.is_null() {
            return Ok(Vec::new());
        }

        let seq = value.as_sequence().ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a list of strings, got {}", Self::kind_name(value)),
        })?;

        seq.iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| ParseError::InvalidValue {
                        field: field.to_string(),
                        message: format!("expected a string, got {}", Self::kind_name(item)),
                    })
            })
            .collect()
    }

    /// Read a mapping key as a string
    ///
    /// Number and boolean keys such as `1:` or `true:` read as their text.
    pub fn key_as_string(key: &YamlValue, context: &str) -> Result<String> {
        match key {
            YamlValue::String(s) => Ok(s.clone()),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            other => Err(ParseError::InvalidValue {
                field: context.to_string(),
                message: format!("expected a scalar key, got {}", Self::kind_name(other)),
            }),
        }
    }

    /// Human readable name of a YAML value's type
    pub fn kind_name(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged value",
        }
    }

    /// Validate fields in a YAML object against a list of known fields
    /// Returns warnings for unknown fields with suggestions
    pub fn validate_fields(obj: &YamlValue, known_fields: &[&str], context: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let Some(mapping) = obj.as_mapping() else {
            return warnings;
        };

        for (key, _) in mapping {
            let Some(field_name) = key.as_str() else {
                continue;
            };
            if known_fields.contains(&field_name) {
                continue;
            }

            let typo_correction = FIELD_CORRECTIONS
                .iter()
                .find(|(typo, _)| *typo == field_name)
                .map(|(_, correct)| correct.to_string());

            let suggestion = match typo_correction
                .or_else(|| Self::find_similar_field(field_name, known_fields))
            {
                Some(correct) => format!(" Did you mean '{}'?", correct),
                None => String::new(),
            };

            warnings.push(format!(
                "Unknown field '{}' in {}.{}",
                field_name, context, suggestion
            ));
        }

        warnings
    }

    /// Check unknown fields, failing in strict mode and logging otherwise
    pub fn check_fields(
        obj: &YamlValue,
        known_fields: &[&str],
        context: &str,
        strict: bool,
    ) -> Result<()> {
        let warnings = Self::validate_fields(obj, known_fields, context);
        if warnings.is_empty() {
            return Ok(());
        }

        if strict {
            for warning in &warnings {
                log::error!("Field validation error: {}", warning);
            }
            return Err(ParseError::InvalidValue {
                field: context.to_string(),
                message: warnings.join("; "),
            });
        }

        for warning in &warnings {
            log::warn!("{}", warning);
        }
        Ok(())
    }

    /// Find similar field names using Levenshtein distance
    fn find_similar_field(field: &str, known_fields: &[&str]) -> Option<String> {
        known_fields
            .iter()
            .filter(|known| levenshtein_distance(field, known) <= 2)
            .min_by_key(|known| levenshtein_distance(field, known))
            .map(|s| s.to_string())
    }
}

/// Common field name typos and their corrections
const FIELD_CORRECTIONS: &[(&str, &str)] = &[
    ("conditions", "condition"),
    ("where", "condition"),
    ("join", "joins"),
    ("variant", "variants"),
    ("operation", "operations"),
    ("ops", "operations"),
];

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, &c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}
