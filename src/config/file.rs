//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".esg-explorer.yaml",
    ".esg-explorer.yml",
    "esg-explorer.yaml",
    "esg-explorer.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (no further search when it is missing)
/// 2. Current directory
/// 3. User config directory (~/.config/esg-explorer/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    search_dirs()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for config files, in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut searched = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        searched.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        searched.push(config_dir.join("esg-explorer"));
    }
    if let Some(home) = dirs::home_dir() {
        searched.push(home);
    }
    searched
}

/// Find a config file in a specific directory.
#[must_use]
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the effective config file.
///
/// An explicit path must exist. Without one, the first discovered file is
/// used, or defaults when there is none. A file that exists but cannot be
/// read or parsed is always an error.
pub fn load_config(explicit_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config_file(None) {
            Some(path) => path,
            None => return Ok((AppConfig::default(), None)),
        },
    };

    let config = load_config_file(&path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok((config, Some(path)))
}

/// Example config file with every option and its default.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# esg-explorer configuration
#
# Place this file as .esg-explorer.yaml in the working directory or in
# ~/.config/esg-explorer/. Command line flags override these values.

api:
  # Base URL of the ESG API server
  base_url: http://localhost:5000
  # Request timeout in seconds (1-300)
  timeout_secs: 30

tui:
  # dark, light, or high-contrast
  theme: dark
  # "/", "/table-fetcher", "/company-table" (or scores, table, company-table)
  start_view: /
  # Event loop tick in milliseconds (50-2000)
  tick_rate_ms: 250

behavior:
  # Show only the response to the latest fetch when fetches overlap
  discard_stale_responses: false
"#
    .to_string()
}
