//! Configuration loading
//!
//! Loading deserializes a YAML document and runs the one-time parse pass, so
//! a successfully loaded [`Configuration`] is ready to render.

use crate::config::LoaderOptions;
use crate::configuration::Configuration;
use crate::error::Result;
use sqlcond_parser::DocumentParser;
use std::path::Path;

/// Loads configurations from YAML sources
#[derive(Debug, Clone, Default)]
pub struct ConfigurationLoader {
    options: LoaderOptions,
}

impl ConfigurationLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load and parse a configuration from a YAML string
    pub fn load_str(&self, yaml: &str) -> Result<Configuration> {
        self.load_bytes(yaml.as_bytes())
    }

    /// Load and parse a configuration from raw YAML bytes
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Configuration> {
        let doc = DocumentParser::new()
            .strict_fields(self.options.strict_fields)
            .parse_bytes(bytes)?;

        let mut config = Configuration::from_document(doc)
            .with_default_tags(self.options.default_tags.iter().cloned());
        config.parse()?;

        tracing::debug!(
            version = config.version(),
            operations = config.operation_names().count(),
            "loaded SQL condition configuration"
        );
        Ok(config)
    }

    /// Load and parse a configuration from a YAML file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Configuration> {
        let path = path.as_ref();
        tracing::info!("Loading SQL condition configuration from {}", path.display());

        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes)
    }
}

/// Load and parse a configuration with default options
pub fn load_configuration(bytes: &[u8]) -> Result<Configuration> {
    ConfigurationLoader::default().load_bytes(bytes)
}
