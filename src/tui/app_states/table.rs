//! "S&P 500 Data for Each ESG Source" view state.

use super::{Scroll, TableSelector};
use crate::api::{QueryParams, RowSet};
use crate::query::{ApplyOutcome, FetchCompletion, FetchRequest, FetchStats, StalePolicy, ViewQuery};
use crate::tui::traits::{EventResult, Shortcut, ViewState};
use crossterm::event::{KeyCode, KeyEvent};

/// Table in, every row of that table out.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub table: TableSelector,
    pub query: ViewQuery<RowSet>,
    /// Selected row
    pub selected: Scroll,
    /// First visible column
    pub column_offset: usize,
}

impl TableView {
    #[must_use]
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            query: ViewQuery::new(policy),
            ..Self::default()
        }
    }

    fn row_count(&self) -> usize {
        self.query.result().success().map_or(0, RowSet::len)
    }

    /// Columns come from the first row.
    fn column_count(&self) -> usize {
        self.query
            .result()
            .success()
            .and_then(|rows| rows.rows().first())
            .map_or(0, |row| row.len())
    }

    fn scroll_columns(&mut self, right: bool) {
        let last = self.column_count().saturating_sub(1);
        self.column_offset = if right {
            (self.column_offset + 1).min(last)
        } else {
            self.column_offset.saturating_sub(1)
        };
    }

    fn reset_position(&mut self) {
        self.selected.home();
        self.column_offset = 0;
    }
}

impl ViewState for TableView {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Char(']' | 't') => {
                self.table.next();
                EventResult::Consumed
            }
            KeyCode::Char('[') => {
                self.table.prev();
                EventResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char('f') => EventResult::Fetch,
            KeyCode::Left | KeyCode::Char('h') => {
                self.scroll_columns(false);
                EventResult::Consumed
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.scroll_columns(true);
                EventResult::Consumed
            }
            code => {
                let rows = self.row_count();
                self.selected.handle_key(code, rows)
            }
        }
    }

    fn params(&self) -> Option<QueryParams> {
        self.table
            .selected()
            .map(|table| QueryParams::Table { table })
    }

    fn missing_input_hint(&self) -> &'static str {
        "Select a table first ([ ] to choose)"
    }

    fn begin(&mut self, params: QueryParams) -> FetchRequest {
        self.reset_position();
        self.query.begin(params)
    }

    fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let outcome = self.query.apply(completion);
        if outcome == ApplyOutcome::Applied {
            self.reset_position();
        }
        outcome
    }

    fn reset(&mut self) {
        self.table = TableSelector::default();
        self.reset_position();
        self.query.reset();
    }

    fn in_flight(&self) -> usize {
        self.query.in_flight()
    }

    fn stats(&self) -> Option<&FetchStats> {
        self.query.stats()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("[ ]", "table"),
            Shortcut::new("Enter", "fetch table"),
            Shortcut::new("↑↓/jk", "row"),
            Shortcut::new("←→/hl", "columns"),
        ]
    }
}
