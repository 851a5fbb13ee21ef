//! "All ESG Scores for Company" view state.

use super::{edit_ticker, Scroll, TickerInput};
use crate::api::{CompanyScores, QueryParams};
use crate::query::{ApplyOutcome, FetchCompletion, FetchRequest, FetchStats, StalePolicy, ViewQuery};
use crate::render::Render;
use crate::tui::traits::{EventResult, Shortcut, ViewState};
use crossterm::event::{KeyCode, KeyEvent};

/// Ticker in, every source's scores out.
#[derive(Debug, Clone, Default)]
pub struct CompanyScoresView {
    pub ticker: TickerInput,
    pub query: ViewQuery<CompanyScores>,
    pub scroll: Scroll,
}

impl CompanyScoresView {
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
            .map_or(0, |scores| scores.render().line_count())
    }
}

impl ViewState for CompanyScoresView {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.ticker.is_editing() {
            return edit_ticker(&mut self.ticker, key);
        }

        match key.code {
            KeyCode::Char('i' | '/') => {
                self.ticker.start_editing();
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
        self.ticker
            .ticker()
            .map(|ticker| QueryParams::AllSources { ticker })
    }

    fn missing_input_hint(&self) -> &'static str {
        "Enter a company ticker first ([i] to edit)"
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
                Shortcut::new("Enter", "fetch"),
                Shortcut::new("Esc", "done"),
                Shortcut::new("Backspace", "delete"),
            ];
        }
        vec![
            Shortcut::new("i", "edit ticker"),
            Shortcut::new("Enter", "fetch"),
            Shortcut::new("↑↓/jk", "scroll"),
        ]
    }
}
