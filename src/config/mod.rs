//! Configuration module for esg-explorer.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.esg-explorer.yaml` file in the working directory or in
//! `~/.config/esg-explorer/`:
//!
//! ```yaml
//! api:
//!   base_url: http://esg.internal:5000
//! tui:
//!   start_view: /company-table
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{ApiConfig, AppConfig, BehaviorConfig, CliOverrides, TuiConfig};
pub use validation::{ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, load_config, load_config_file,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.esg-explorer.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        tracing::warn!("schema serialization failed: {}", e);
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_every_section() {
        let schema = generate_json_schema();
        for section in ["api", "tui", "behavior", "discard_stale_responses"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
