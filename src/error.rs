//! Unified error types for esg-explorer.
//!
//! Library code returns [`EsgError`]; the binary wraps it in `anyhow` at the
//! edges. Fetch failures carry a [`FetchErrorKind`] so the query layer can map
//! them onto the fixed user-facing messages without string matching.

use thiserror::Error;

/// Main error type for esg-explorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EsgError {
    /// Errors while fetching or decoding data from the ESG API
    #[error("Fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for esg-explorer operations
pub type Result<T> = std::result::Result<T, EsgError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl EsgError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch error for a non-success HTTP status
    pub fn status(path: impl std::fmt::Display, status: u16) -> Self {
        Self::fetch(format!("GET {path}"), FetchErrorKind::Status(status))
    }

    /// Create a fetch error for a body that failed to decode
    pub fn invalid_json(context: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::fetch(context, FetchErrorKind::InvalidJson(err.to_string()))
    }

    /// Create a fetch error for JSON of the wrong structure
    pub fn unexpected_shape(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::fetch(context, FetchErrorKind::UnexpectedShape(detail.into()))
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The fetch failure kind, if this is a fetch error.
    #[must_use]
    pub const fn fetch_kind(&self) -> Option<&FetchErrorKind> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}
