//! sqlcond Parser - YAML and token parser for sqlcond configurations
//!
//! This crate converts YAML operation documents into raw documents and turns
//! each variant's nested token list into a flat [`sqlcond_core::Expression`].

pub mod document_parser;
pub mod error;
pub mod token_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use document_parser::{ConfigDocument, DocumentParser, OperationDocument, VariantDocument};
pub use error::{ParseError, Result, TokenPath};
pub use token_parser::TokenParser;
pub use yaml_parser::YamlParser;
