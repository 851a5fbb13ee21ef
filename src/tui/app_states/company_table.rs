//! "Company Search for Each ESG Source" view state.

use super::{edit_ticker, Scroll, TableSelector, TickerInput};
use crate::api::{QueryParams, RowSet};
use crate::query::{ApplyOutcome, FetchCompletion, FetchRequest, FetchStats, StalePolicy, ViewQuery};
use crate::render::Render;
use crate::tui::traits::{EventResult, Shortcut, ViewState};
use crossterm::event::{KeyCode, KeyEvent};

/// Table and ticker in, the company's rows in that table out.
#[derive(Debug, Clone, Default)]
pub struct CompanyTableView {
    pub table: TableSelector,
    pub ticker: TickerInput,
    pub query: ViewQuery<RowSet>,
    pub scroll: Scroll,
}

impl CompanyTableView {
    #[must_use]
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            query: ViewQuery::new(policy),
            ..Self::default()
        }
    }

    fn content_lines(&self) -> usize {
        self.query
            .result()
            .success()
            .map_or(0, |rows| rows.render().record_line_count())
    }
}

impl ViewState for CompanyTableView {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.ticker.is_editing() {
            return edit_ticker(&mut self.ticker, key);
        }

        match key.code {
            KeyCode::Char('i' | '/') => {
                self.ticker.start_editing();
                EventResult::Consumed
            }
            KeyCode::Char(']' | 't') => {
                self.table.next();
                EventResult::Consumed
            }
            KeyCode::Char('[') => {
                self.table.prev();
                EventResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char('f') => EventResult::Fetch,
            code => {
                let lines = self.content_lines();
                self.scroll.handle_key(code, lines)
            }
        }
    }

    fn is_editing(&self) -> bool {
        self.ticker.is_editing()
    }

    fn params(&self) -> Option<QueryParams> {
        let table = self.table.selected()?;
        let ticker = self.ticker.ticker()?;
        Some(QueryParams::TableTicker { table, ticker })
    }

    fn missing_input_hint(&self) -> &'static str {
        match (self.table.selected(), self.ticker.ticker()) {
            (None, None) => "Select a table and enter a ticker first",
            (None, Some(_)) => "Select a table first ([ ] to choose)",
            _ => "Enter a company ticker first ([i] to edit)",
        }
    }

    fn begin(&mut self, params: QueryParams) -> FetchRequest {
        self.scroll.home();
        self.query.begin(params)
    }

    fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let outcome = self.query.apply(completion);
        if outcome == ApplyOutcome::Applied {
            self.scroll.home();
        }
        outcome
    }

    fn reset(&mut self) {
        self.table = TableSelector::default();
        self.ticker = TickerInput::new();
        self.scroll = Scroll::default();
        self.query.reset();
    }

    fn in_flight(&self) -> usize {
        self.query.in_flight()
    }

    fn stats(&self) -> Option<&FetchStats> {
        self.query.stats()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        if self.ticker.is_editing() {
            return vec![
                Shortcut::new("Enter", "fetch data"),
                Shortcut::new("Esc", "done"),
                Shortcut::new("Backspace", "delete"),
            ];
        }
        vec![
            Shortcut::new("[ ]", "table"),
            Shortcut::new("i", "edit ticker"),
            Shortcut::new("Enter", "fetch data"),
            Shortcut::new("↑↓/jk", "scroll"),
        ]
    }
}
