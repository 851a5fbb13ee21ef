//! Display structures for query results.
//!
//! Everything here is a pure function of borrowed state: renderers never
//! mutate the [`QueryResult`] they read. The TUI draws the structures
//! produced here; tests assert on them directly.

use crate::api::{CellValue, CompanyScores, QueryParams, RowSet};
use crate::query::QueryResult;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// One rating source and its scores, pretty-printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBlock {
    pub source: String,
    /// Two-space-indented JSON of the source's scores
    pub body: String,
}

/// Grouped view of a [`CompanyScores`] payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBlocks {
    pub blocks: Vec<ScoreBlock>,
}

impl ScoreBlocks {
    /// Lines taken when each block is laid out as a source line, its body,
    /// and a blank separator.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.body.lines().count() + 2)
            .sum()
    }
}

/// Tabular view of a [`RowSet`] payload.
///
/// Headers come from the first row. Every rendered row has exactly one cell
/// per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowTable {
    /// Each row as `(header, cell)` pairs, for record-style layouts.
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(|row| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }

    /// Display width of each column (header and cells), capped at `max`.
    #[must_use]
    pub fn column_widths(&self, max: usize) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(header.as_str())))
                    .max()
                    .unwrap_or(0)
                    .min(max)
            })
            .collect()
    }

    /// Lines taken by the record layout: one per field plus a separator per
    /// record.
    #[must_use]
    pub fn record_line_count(&self) -> usize {
        self.rows.len() * (self.headers.len() + 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renderable payloads.
pub trait Render {
    type Output;

    fn render(&self) -> Self::Output;
}

impl Render for CompanyScores {
    type Output = ScoreBlocks;

    fn render(&self) -> ScoreBlocks {
        ScoreBlocks {
            blocks: self
                .iter()
                .map(|(source, scores)| ScoreBlock {
                    source: source.to_string(),
                    body: pretty_json(scores),
                })
                .collect(),
        }
    }
}

impl Render for RowSet {
    type Output = RowTable;

    fn render(&self) -> RowTable {
        let Some(first) = self.rows().first() else {
            return RowTable::default();
        };
        let headers: Vec<String> = first.keys().cloned().collect();

        let rows = self
            .rows()
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|header| render_cell(row.get(header)))
                    .collect()
            })
            .collect();

        RowTable { headers, rows }
    }
}

/// Render a cell; a missing cell renders like a null one.
#[must_use]
pub fn render_cell(cell: Option<&CellValue>) -> String {
    cell.map_or_else(|| CellValue::PLACEHOLDER.to_string(), ToString::to_string)
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// What a view should show for its current result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultDisplay<D> {
    Idle,
    Pending,
    Ready(D),
    Error(String),
}

impl<D> ResultDisplay<D> {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Map a result to its display structure.
#[must_use]
pub fn display<T: Render>(result: &QueryResult<T>) -> ResultDisplay<T::Output> {
    match result {
        QueryResult::Idle => ResultDisplay::Idle,
        QueryResult::Pending => ResultDisplay::Pending,
        QueryResult::Success(payload) => ResultDisplay::Ready(payload.render()),
        QueryResult::Failure(message) => ResultDisplay::Error(message.clone()),
    }
}

/// Heading shown above a successful result.
#[must_use]
pub fn result_title(params: &QueryParams) -> String {
    match params {
        QueryParams::AllSources { ticker } => format!("{ticker} ESG Scores"),
        QueryParams::Table { table } => format!("{table} Data"),
        QueryParams::TableTicker { table, ticker } => format!("{ticker} Data in {table}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Payload, QueryMode, TableName, Ticker};

    fn rows(json: &str) -> RowSet {
        match Payload::decode(QueryMode::Table, json.as_bytes()).unwrap() {
            Payload::Rows(rows) => rows,
            Payload::Scores(_) => unreachable!(),
        }
    }

    fn scores(json: &str) -> CompanyScores {
        match Payload::decode(QueryMode::AllSources, json.as_bytes()).unwrap() {
            Payload::Scores(scores) => scores,
            Payload::Rows(_) => unreachable!(),
        }
    }

    #[test]
    fn test_headers_and_null_placeholder() {
        let table = rows(r#"[{"a":1,"b":null}]"#).render();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "N/A".to_string()]]);
    }

    #[test]
    fn test_empty_rows_render_empty_table() {
        let table = rows("[]").render();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
        assert!(table.column_widths(40).is_empty());
    }

    #[test]
    fn test_rows_follow_first_row_header_order() {
        let table = rows(r#"[{"a":1,"b":2},{"b":3,"a":4},{"a":5,"c":6}]"#).render();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[1], vec!["4", "3"]);
        assert_eq!(table.rows[2], vec!["5", "N/A"]);
    }

    #[test]
    fn test_records_pair_headers_with_cells() {
        let table = rows(r#"[{"Score":72,"Date":null}]"#).render();
        let records: Vec<_> = table.records().collect();
        assert_eq!(records, vec![vec![("Score", "72"), ("Date", "N/A")]]);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let table = rows(r#"[{"id":"x","description":"a very long description value"}]"#).render();
        assert_eq!(table.column_widths(10), vec![2, 10]);
    }

    #[test]
    fn test_score_blocks_keep_source_order() {
        let blocks = scores(r#"{"yahoo_table":{"total":21.5,"env":null},"csrhub_table":58}"#)
            .render()
            .blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].source, "yahoo_table");
        assert_eq!(blocks[0].body, "{\n  \"total\": 21.5,\n  \"env\": null\n}");
        assert_eq!(blocks[1].source, "csrhub_table");
        assert_eq!(blocks[1].body, "58");
    }

    #[test]
    fn test_score_block_line_count() {
        let rendered = scores(r#"{"yahoo_table":{"total":21.5},"csrhub_table":58}"#).render();
        // 3 body lines + 2, then 1 body line + 2
        assert_eq!(rendered.line_count(), 8);
    }

    #[test]
    fn test_display_maps_each_state() {
        let idle: QueryResult<RowSet> = QueryResult::Idle;
        assert_eq!(display(&idle), ResultDisplay::Idle);

        let failure: QueryResult<RowSet> = QueryResult::Failure("Failed to fetch table data".into());
        let shown = display(&failure);
        assert!(shown.is_error());
        assert_eq!(shown, ResultDisplay::Error("Failed to fetch table data".into()));

        let success = QueryResult::Success(rows(r#"[{"x":true}]"#));
        match display(&success) {
            ResultDisplay::Ready(table) => assert_eq!(table.rows, vec![vec!["true"]]),
            other => panic!("unexpected display: {other:?}"),
        }
    }

    #[test]
    fn test_result_titles() {
        let ticker = Ticker::new("AAPL").unwrap();
        assert_eq!(
            result_title(&QueryParams::AllSources { ticker: ticker.clone() }),
            "AAPL ESG Scores"
        );
        assert_eq!(
            result_title(&QueryParams::Table { table: TableName::Msci }),
            "msci_table Data"
        );
        assert_eq!(
            result_title(&QueryParams::TableTicker {
                table: TableName::Msci,
                ticker
            }),
            "AAPL Data in msci_table"
        );
    }
}
