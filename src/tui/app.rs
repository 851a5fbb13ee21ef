//! Navigation shell: active tab, per-view state, and fetch routing.

use super::app_states::{CompanyScoresView, CompanyTableView, TableView};
use super::status::StatusMessage;
use super::traits::ViewState;
use crate::api::{QueryMode, QueryParams};
use crate::query::{ApplyOutcome, FetchCompletion, FetchRequest, StalePolicy};
use std::time::Duration;

/// How long footer messages stay up.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// The three query views, one per route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewTab {
    /// Ticker across every source (`/`)
    #[default]
    CompanyScores,
    /// Whole table (`/table-fetcher`)
    Table,
    /// Ticker within one table (`/company-table`)
    CompanyTable,
}

impl ViewTab {
    pub const ALL: [Self; 3] = [Self::CompanyScores, Self::Table, Self::CompanyTable];

    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::CompanyScores => "/",
            Self::Table => "/table-fetcher",
            Self::CompanyTable => "/company-table",
        }
    }

    /// Parse a route, or one of the short names `scores`, `table` and
    /// `company-table`.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim().to_lowercase().as_str() {
            "/" | "scores" | "company-scores" => Some(Self::CompanyScores),
            "/table-fetcher" | "table" | "table-fetcher" => Some(Self::Table),
            "/company-table" | "company-table" => Some(Self::CompanyTable),
            _ => None,
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyScores => "All ESG Scores for Company",
            Self::Table => "S&P 500 Data for Each ESG Source",
            Self::CompanyTable => "Company Search for Each ESG Source",
        }
    }

    /// Compact label for narrow terminals.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::CompanyScores => "Company Scores",
            Self::Table => "Table Data",
            Self::CompanyTable => "Company in Table",
        }
    }

    /// Heading shown above the view's inputs.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::CompanyScores => "ESG Company Scores",
            Self::Table => "Fetch Table Data",
            Self::CompanyTable => "Fetch Company Data from Specific Table",
        }
    }

    /// Text of the view's fetch button.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Table => "Fetch Table",
            Self::CompanyScores | Self::CompanyTable => "Fetch Data",
        }
    }

    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::CompanyScores => '1',
            Self::Table => '2',
            Self::CompanyTable => '3',
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::CompanyScores => 0,
            Self::Table => 1,
            Self::CompanyTable => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::CompanyScores => Self::Table,
            Self::Table => Self::CompanyTable,
            Self::CompanyTable => Self::CompanyScores,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::CompanyScores => Self::CompanyTable,
            Self::Table => Self::CompanyScores,
            Self::CompanyTable => Self::Table,
        }
    }

    /// The query mode this view issues.
    #[must_use]
    pub const fn mode(self) -> QueryMode {
        match self {
            Self::CompanyScores => QueryMode::AllSources,
            Self::Table => QueryMode::Table,
            Self::CompanyTable => QueryMode::TableTicker,
        }
    }

    /// The view that issues `mode` queries.
    #[must_use]
    pub const fn for_mode(mode: QueryMode) -> Self {
        match mode {
            QueryMode::AllSources => Self::CompanyScores,
            QueryMode::Table => Self::Table,
            QueryMode::TableTicker => Self::CompanyTable,
        }
    }
}

/// Application state for the explorer.
#[derive(Debug)]
pub struct App {
    /// Current active view/tab
    pub active_tab: ViewTab,
    pub scores: CompanyScoresView,
    pub table: TableView,
    pub company_table: CompanyTableView,
    /// Footer message
    pub status: StatusMessage,
    /// Base URL requests go to, shown in the header
    pub api_url: String,
    pub show_help: bool,
    pub should_quit: bool,
    /// Animation tick counter
    pub tick: u64,
}

impl App {
    #[must_use]
    pub fn new(start: ViewTab, policy: StalePolicy, api_url: impl Into<String>) -> Self {
        Self {
            active_tab: start,
            scores: CompanyScoresView::new(policy),
            table: TableView::new(policy),
            company_table: CompanyTableView::new(policy),
            status: StatusMessage::with_auto_clear(STATUS_TTL),
            api_url: api_url.into(),
            show_help: false,
            should_quit: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn view(&self, tab: ViewTab) -> &dyn ViewState {
        match tab {
            ViewTab::CompanyScores => &self.scores,
            ViewTab::Table => &self.table,
            ViewTab::CompanyTable => &self.company_table,
        }
    }

    pub fn view_mut(&mut self, tab: ViewTab) -> &mut dyn ViewState {
        match tab {
            ViewTab::CompanyScores => &mut self.scores,
            ViewTab::Table => &mut self.table,
            ViewTab::CompanyTable => &mut self.company_table,
        }
    }

    #[must_use]
    pub fn active_view(&self) -> &dyn ViewState {
        self.view(self.active_tab)
    }

    pub fn active_view_mut(&mut self) -> &mut dyn ViewState {
        self.view_mut(self.active_tab)
    }

    /// Activate `tab`. A view that was not already active starts over from
    /// its initial state, and anything it still had in flight is ignored.
    pub fn select_tab(&mut self, tab: ViewTab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!("switching view {} -> {}", self.active_tab.route(), tab.route());
        self.view_mut(tab).reset();
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Press the active view's fetch button.
    ///
    /// Returns the request to dispatch, or `None` (with a footer hint and no
    /// state change) when a required input is empty.
    pub fn trigger_fetch(&mut self) -> Option<FetchRequest> {
        let view = self.active_view();
        let Some(params) = view.params() else {
            let hint = view.missing_input_hint();
            self.status.warn(hint);
            return None;
        };
        Some(self.begin_fetch(params))
    }

    fn begin_fetch(&mut self, params: QueryParams) -> FetchRequest {
        let tab = ViewTab::for_mode(params.mode());
        let request = self.view_mut(tab).begin(params);
        tracing::debug!(
            "view {} issued fetch #{} {}",
            tab.route(),
            request.seq,
            request.params.endpoint()
        );
        request
    }

    /// Hand a completion to the view that issued it.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let tab = ViewTab::for_mode(completion.mode());
        self.view_mut(tab).apply(completion)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TableName;

    #[test]
    fn test_routes_round_trip() {
        for tab in ViewTab::ALL {
            assert_eq!(ViewTab::from_route(tab.route()), Some(tab));
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(ViewTab::for_mode(tab.mode()), tab);
        }
        assert_eq!(ViewTab::from_route("Table"), Some(ViewTab::Table));
        assert_eq!(ViewTab::from_route("/settings"), None);
    }

    #[test]
    fn test_fetch_without_input_is_refused() {
        let mut app = App::new(ViewTab::Table, StalePolicy::default(), "http://localhost:5000");
        assert!(app.trigger_fetch().is_none());
        assert!(app.status.has_message());
        assert!(!app.table.query.result().is_pending());
    }

    #[test]
    fn test_switching_tabs_resets_target_only() {
        let mut app = App::new(ViewTab::Table, StalePolicy::default(), "http://localhost:5000");
        app.table.table.select(Some(TableName::Yahoo));
        app.company_table.ticker.set("aapl");

        app.select_tab(ViewTab::Table);
        assert_eq!(app.table.table.selected(), Some(TableName::Yahoo));

        app.next_tab();
        assert_eq!(app.active_tab, ViewTab::CompanyTable);
        assert_eq!(app.company_table.ticker.text(), "");
    }
}
