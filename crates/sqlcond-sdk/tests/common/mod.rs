//! Common test utilities for SDK integration tests

use sqlcond_sdk::{Configuration, ConfigurationLoader, FilterArgs};
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once, honoring `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Path of a fixture under `tests/testdata`
pub fn testdata_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(file_name)
}

/// Load a fixture with default options
pub fn load_testdata(file_name: &str) -> Configuration {
    init_tracing();
    ConfigurationLoader::default()
        .load_file(testdata_path(file_name))
        .unwrap_or_else(|e| panic!("failed to load {}: {}", file_name, e))
}

/// Filter arguments with the given names present
pub fn args_with(names: &[&str]) -> FilterArgs {
    names.iter().map(|name| (*name, 123456)).collect()
}
