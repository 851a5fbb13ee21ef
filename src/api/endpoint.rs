//! Query parameters and endpoint path construction.
//!
//! Every request the explorer makes is described by a [`QueryParams`] value.
//! A `QueryParams` can only be built when all of its fields are present, so a
//! fetch with a missing table or a blank ticker cannot be expressed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root segment shared by every ESG API route.
pub const API_ROOT: &str = "esg_api";

/// Segment used by the cross-table ticker lookup.
pub const ALL_TABLES: &str = "all_tables";

/// One rating provider's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableName {
    #[serde(rename = "csrhub_table")]
    Csrhub,
    #[serde(rename = "lseg_table")]
    Lseg,
    #[serde(rename = "msci_table")]
    Msci,
    #[serde(rename = "spglobal_table")]
    Spglobal,
    #[serde(rename = "yahoo_table")]
    Yahoo,
}

impl TableName {
    /// All known tables, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Csrhub,
        Self::Lseg,
        Self::Msci,
        Self::Spglobal,
        Self::Yahoo,
    ];

    /// Identifier used in endpoint paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csrhub => "csrhub_table",
            Self::Lseg => "lseg_table",
            Self::Msci => "msci_table",
            Self::Spglobal => "spglobal_table",
            Self::Yahoo => "yahoo_table",
        }
    }

    /// Human-readable label for selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csrhub => "CSRHub Table",
            Self::Lseg => "LSEG Table",
            Self::Msci => "MSCI Table",
            Self::Spglobal => "S&P Global Table",
            Self::Yahoo => "Yahoo Table",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let source = lower.strip_suffix("_table").unwrap_or(&lower);
        match source {
            "csrhub" => Ok(Self::Csrhub),
            "lseg" => Ok(Self::Lseg),
            "msci" => Ok(Self::Msci),
            "spglobal" => Ok(Self::Spglobal),
            "yahoo" => Ok(Self::Yahoo),
            _ => Err(format!(
                "unknown table '{s}' (expected one of: {})",
                Self::ALL.map(Self::as_str).join(", ")
            )),
        }
    }
}

/// A company stock symbol, uppercased and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize free text into a ticker.
    ///
    /// Returns `None` for blank input and for `.`-only input, which a URL
    /// would resolve as a relative path step instead of a segment.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().all(|c| c == '.') {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the three query views a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// One ticker across every rating source
    AllSources,
    /// Every row of one table
    Table,
    /// One ticker's rows in one table
    TableTicker,
}

impl QueryMode {
    /// Noun used in user-facing failure messages.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::AllSources | Self::TableTicker => "company",
            Self::Table => "table",
        }
    }
}

/// Fully specified request parameters for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParams {
    AllSources { ticker: Ticker },
    Table { table: TableName },
    TableTicker { table: TableName, ticker: Ticker },
}

impl QueryParams {
    #[must_use]
    pub const fn mode(&self) -> QueryMode {
        match self {
            Self::AllSources { .. } => QueryMode::AllSources,
            Self::Table { .. } => QueryMode::Table,
            Self::TableTicker { .. } => QueryMode::TableTicker,
        }
    }

    /// Build the request path for these parameters.
    #[must_use]
    pub fn endpoint(&self) -> EndpointPath {
        let mut segments = vec![API_ROOT.to_string()];
        match self {
            Self::AllSources { ticker } => {
                segments.push(ALL_TABLES.to_string());
                segments.push(ticker.as_str().to_string());
            }
            Self::Table { table } => {
                segments.push(table.as_str().to_string());
            }
            Self::TableTicker { table, ticker } => {
                segments.push(table.as_str().to_string());
                segments.push(ticker.as_str().to_string());
            }
        }
        EndpointPath { segments }
    }

    #[must_use]
    pub const fn table(&self) -> Option<TableName> {
        match self {
            Self::AllSources { .. } => None,
            Self::Table { table } | Self::TableTicker { table, .. } => Some(*table),
        }
    }

    #[must_use]
    pub const fn ticker(&self) -> Option<&Ticker> {
        match self {
            Self::Table { .. } => None,
            Self::AllSources { ticker } | Self::TableTicker { ticker, .. } => Some(ticker),
        }
    }
}

/// A request path relative to the API base URL.
///
/// Segments are stored unescaped; the client escapes them when joining onto
/// the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPath {
    segments: Vec<String>,
}

impl EndpointPath {
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
