//! **A terminal explorer for ESG rating tables.**
//!
//! `esg-explorer` queries an ESG API that serves per-company ratings from
//! several rating providers (CSRHub, LSEG, MSCI, S&P Global and Yahoo) and
//! shows the results in an interactive terminal UI.
//!
//! ## Core Concepts & Modules
//!
//! - **[`api`]**: Request parameters ([`QueryParams`]), endpoint path
//!   construction, the [`EsgTransport`] trait and its HTTP implementation
//!   [`EsgClient`], and the decoded payload types.
//! - **[`query`]**: Runs a fetch and folds the outcome into a per-view
//!   [`QueryResult`] (`Idle`, `Pending`, `Success` or `Failure`).
//! - **[`render`]**: Turns a `QueryResult` into display structures: score
//!   blocks per source, or a header/row grid with `N/A` for missing values.
//! - **[`tui`]**: The navigation shell and the three query views.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Fetching without the TUI
//!
//! ```no_run
//! use esg_explorer::api::{EsgClient, EsgClientConfig, QueryParams, TableName, Ticker};
//! use esg_explorer::query::execute;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EsgClient::new(EsgClientConfig::default())?;
//!     let params = QueryParams::TableTicker {
//!         table: TableName::Msci,
//!         ticker: Ticker::new("AAPL").ok_or("blank ticker")?,
//!     };
//!     let payload = execute(&client, &params)?;
//!     println!("{payload:?}");
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // usize/u16 casts are pervasive in TUI layout math and bounded in practice
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::similar_names
)]

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod render;
pub mod tui;

// Re-export main types for convenience
pub use api::{EsgClient, EsgClientConfig, EsgTransport, QueryMode, QueryParams, TableName, Ticker};
pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{EsgError, FetchErrorKind, Result};
pub use query::{ApplyOutcome, QueryResult, StalePolicy, ViewQuery};
pub use render::{RowTable, ScoreBlocks};
