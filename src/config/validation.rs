//! Configuration validation for esg-explorer.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{ApiConfig, AppConfig, BehaviorConfig, TuiConfig};
use crate::tui::ViewTab;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

/// Themes accepted by `tui.theme`.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.tui.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: format!("Unsupported scheme '{}' (use http or https)", url.scheme()),
            }),
            Err(e) => errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: format!("Invalid URL '{}': {}", self.base_url, e),
            }),
        }

        if !(1..=300).contains(&self.timeout_secs) {
            errors.push(ConfigError {
                field: "api.timeout_secs".to_string(),
                message: format!(
                    "Timeout must be between 1 and 300 seconds, got {}",
                    self.timeout_secs
                ),
            });
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if ViewTab::from_route(&self.start_view).is_none() {
            errors.push(ConfigError {
                field: "tui.start_view".to_string(),
                message: format!(
                    "Unknown view '{}'. Valid routes: {}",
                    self.start_view,
                    ViewTab::ALL.map(ViewTab::route).join(", ")
                ),
            });
        }

        if !(50..=2000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 50 and 2000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}
