//! sqlcond SDK
//!
//! High-level API for loading tag-variant operation configurations and
//! rendering their SQL conditions.

pub mod config;
pub mod configuration;
pub mod error;
pub mod loader;

// Re-export main types
pub use config::LoaderOptions;
pub use configuration::{
    Configuration, OperationConfig, OperationVariant, RenderedCondition, DEFAULT_TAG,
};
pub use error::{Result, SdkError};
pub use loader::{load_configuration, ConfigurationLoader};

// Re-export commonly used types from dependencies
pub use serde_json::Value;
pub use sqlcond_core::{render, Expression, FilterArgs, RawToken};
