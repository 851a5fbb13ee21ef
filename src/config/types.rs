//! Configuration types for esg-explorer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File values are loaded first; CLI flags are layered on top with
/// [`AppConfig::merge_cli`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// ESG API connection settings
    pub api: ApiConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay values given on the command line.
    pub fn merge_cli(&mut self, overrides: &CliOverrides) {
        if let Some(ref url) = overrides.api_url {
            self.api.base_url.clone_from(url);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(ref theme) = overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(ref view) = overrides.start_view {
            self.tui.start_view.clone_from(view);
        }
        if overrides.discard_stale_responses {
            self.behavior.discard_stale_responses = true;
        }
    }
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub start_view: Option<String>,
    pub discard_stale_responses: bool,
}

// ============================================================================
// API Configuration
// ============================================================================

/// Where and how to reach the ESG API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/esg_api/...` routes are appended to
    pub base_url: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// View opened at startup: a route ("/", "/table-fetcher",
    /// "/company-table") or a short name ("scores", "table", "company-table")
    pub start_view: String,
    /// Event loop tick interval in milliseconds
    #[schemars(range(min = 50, max = 2000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            start_view: "/".to_string(),
            tick_rate_ms: 250,
        }
    }
}

// ============================================================================
// Behavior Configuration
// ============================================================================

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// When several fetches overlap in one view, show only the response to
    /// the most recent one instead of whichever resolves last
    pub discard_stale_responses: bool,
}
