//! Typed response payloads.
//!
//! The ESG API answers with loosely shaped JSON. Each query mode gets an
//! explicit type here, and decoding checks the structure before anything is
//! rendered: a body of the wrong shape becomes an
//! [`FetchErrorKind::UnexpectedShape`](crate::error::FetchErrorKind) error.

use super::endpoint::QueryMode;
use crate::error::{EsgError, Result};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::fmt;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl CellValue {
    /// Placeholder shown for absent values.
    pub const PLACEHOLDER: &'static str = "N/A";

    fn from_json(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => Ok(Self::Number(n)),
            Value::String(s) => Ok(Self::Text(s)),
            nested @ (Value::Array(_) | Value::Object(_)) => Err(nested),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(Self::PLACEHOLDER),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Largest integer a browser holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Format a JSON number the way a browser would stringify it.
///
/// Integral floats drop their fractional part (`72.0` prints as `72`),
/// magnitudes below `1e-6` or from `1e21` up use exponent form (`1e+21`,
/// `1.5e-7`), and negative zero prints as `0`.
#[must_use]
pub fn format_number(n: &Number) -> String {
    let magnitude = n.as_u64().or_else(|| n.as_i64().map(i64::unsigned_abs));
    if magnitude.is_some_and(|m| m <= MAX_SAFE_INTEGER) {
        return n.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), format_float)
}

fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return format!("{f}");
    }
    let scientific = format!("{f:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// One row of a table: column name to cell, in received order.
pub type Row = IndexMap<String, CellValue>;

/// Ordered rows returned by the table and table-ticker endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode a JSON array of flat objects.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(EsgError::unexpected_shape(
                    "decoding rows",
                    format!("expected an array of rows, got {}", json_kind(&other)),
                ));
            }
        };

        let mut rows = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let fields = match item {
                Value::Object(fields) => fields,
                other => {
                    return Err(EsgError::unexpected_shape(
                        "decoding rows",
                        format!("row {index} is {}, expected an object", json_kind(&other)),
                    ));
                }
            };

            let mut row = Row::with_capacity(fields.len());
            for (column, value) in fields {
                let cell = CellValue::from_json(value).map_err(|nested| {
                    EsgError::unexpected_shape(
                        "decoding rows",
                        format!(
                            "row {index} column '{column}' holds {}",
                            json_kind(&nested)
                        ),
                    )
                })?;
                row.insert(column, cell);
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }
}

/// Scores for one company keyed by rating source, in received order.
///
/// Each source maps to a JSON value: an object of score fields, or a bare
/// score when the server reports a single number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyScores {
    sources: IndexMap<String, Value>,
}

impl CompanyScores {
    #[must_use]
    pub fn new(sources: IndexMap<String, Value>) -> Self {
        Self { sources }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sources.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn get(&self, source: &str) -> Option<&Value> {
        self.sources.get(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Decode a JSON object keyed by source name.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                sources: map.into_iter().collect(),
            }),
            other => Err(EsgError::unexpected_shape(
                "decoding company scores",
                format!("expected an object keyed by source, got {}", json_kind(&other)),
            )),
        }
    }
}

/// A decoded response for any query mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Scores(CompanyScores),
    Rows(RowSet),
}

impl Payload {
    /// Decode a response body for the given mode.
    pub fn decode(mode: QueryMode, body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| EsgError::invalid_json(format!("decoding {} data", mode.subject()), &e))?;

        match mode {
            QueryMode::AllSources => CompanyScores::from_value(value).map(Self::Scores),
            QueryMode::Table | QueryMode::TableTicker => RowSet::from_value(value).map(Self::Rows),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
