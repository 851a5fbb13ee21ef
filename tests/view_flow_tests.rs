//! End-to-end view flows: key presses through fetch, completion and render.
//!
//! A scripted in-memory transport stands in for the ESG API so each flow can
//! control response order and failures.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use esg_explorer::api::{EndpointPath, EsgTransport, TableName};
use esg_explorer::error::{EsgError, Result};
use esg_explorer::query::{run, ApplyOutcome, FetchCompletion, FetchRequest, QueryResult, StalePolicy};
use esg_explorer::render::{display, result_title, Render, ResultDisplay};
use esg_explorer::tui::{handle_key_event, App, ViewState, ViewTab};
use std::collections::HashMap;
use std::sync::Mutex;

type Response = std::result::Result<&'static str, u16>;

/// Answers from a per-path script; every request is recorded.
#[derive(Default)]
struct Scripted {
    responses: Mutex<HashMap<String, Vec<Response>>>,
    requests: Mutex<Vec<String>>,
}

impl Scripted {
    /// Queue a response for `path`; queued responses are served in order.
    fn respond(&self, path: &str, response: Response) {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(response);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl EsgTransport for Scripted {
    fn get(&self, path: &EndpointPath) -> Result<Vec<u8>> {
        let key = path.to_string();
        self.requests.lock().unwrap().push(key.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&key)
            .filter(|queue| !queue.is_empty())
            .map(|queue| queue.remove(0))
            .unwrap_or(Err(404));
        match next {
            Ok(body) => Ok(body.as_bytes().to_vec()),
            Err(status) => Err(EsgError::status(path, status)),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> Option<FetchRequest> {
    handle_key_event(app, key(code))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        assert!(press(app, KeyCode::Char(c)).is_none());
    }
}

fn app(start: ViewTab) -> App {
    App::new(start, StalePolicy::default(), "http://localhost:5000")
}

fn complete(transport: &Scripted, request: FetchRequest) -> FetchCompletion {
    run(transport, request)
}

#[test]
fn company_table_record_scenario() {
    let transport = Scripted::default();
    transport.respond("/esg_api/msci_table/AAPL", Ok(r#"[{"Score":72,"Date":null}]"#));

    let mut app = app(ViewTab::CompanyTable);
    app.company_table.table.select(Some(TableName::Msci));
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "aapl");

    let request = press(&mut app, KeyCode::Enter).expect("fetch issued");
    assert!(app.company_table.query.result().is_pending());
    assert_eq!(app.company_table.in_flight(), 1);

    let outcome = app.apply_completion(complete(&transport, request));
    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(transport.requests(), vec!["/esg_api/msci_table/AAPL"]);

    let query = &app.company_table.query;
    let title = query.shown_params().map(result_title).expect("fetched params shown");
    assert_eq!(title, "AAPL Data in msci_table");

    let ResultDisplay::Ready(table) = display(query.result()) else {
        panic!("expected a rendered table");
    };
    let records: Vec<Vec<(&str, &str)>> = table.records().collect();
    assert_eq!(records, vec![vec![("Score", "72"), ("Date", "N/A")]]);
}

#[test]
fn error_then_success_leaves_no_error_text() {
    let transport = Scripted::default();
    transport.respond("/esg_api/all_tables/TSLA", Err(500));
    transport.respond("/esg_api/all_tables/TSLA", Ok(r#"{"msci":{"rating":"A"}}"#));

    let mut app = app(ViewTab::CompanyScores);
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "tsla");

    let first = press(&mut app, KeyCode::Enter).expect("fetch issued");
    app.apply_completion(complete(&transport, first));
    assert_eq!(
        app.scores.query.result().error(),
        Some("Failed to fetch company data")
    );

    // Ticker editing ended on Enter; `f` fetches again
    let second = press(&mut app, KeyCode::Char('f')).expect("retry issued");
    assert!(app.scores.query.result().error().is_none());
    app.apply_completion(complete(&transport, second));

    let result = app.scores.query.result();
    assert!(result.error().is_none());
    let scores = result.success().expect("success after retry");
    assert_eq!(scores.render().blocks[0].source, "msci");
}

#[test]
fn empty_inputs_issue_no_request() {
    let mut app = app(ViewTab::Table);
    assert!(press(&mut app, KeyCode::Enter).is_none());
    assert!(app.status.has_message());
    assert_eq!(*app.table.query.result(), QueryResult::Idle);

    app.select_tab(ViewTab::CompanyTable);
    app.company_table.table.select(Some(TableName::Yahoo));
    assert!(press(&mut app, KeyCode::Enter).is_none(), "ticker still blank");

    app.select_tab(ViewTab::CompanyScores);
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "   ");
    assert!(press(&mut app, KeyCode::Enter).is_none(), "whitespace ticker");
    assert_eq!(app.scores.in_flight(), 0);
}

#[test]
fn table_view_renders_grid_with_placeholders() {
    let transport = Scripted::default();
    transport.respond(
        "/esg_api/yahoo_table",
        Ok(r#"[{"ticker":"AAPL","total":21.5},{"ticker":"MSFT","total":null}]"#),
    );

    let mut app = app(ViewTab::Table);
    app.table.table.select(Some(TableName::Yahoo));
    let request = press(&mut app, KeyCode::Char('f')).expect("fetch issued");
    app.apply_completion(complete(&transport, request));

    let table = app.table.query.result().success().expect("rows").render();
    assert_eq!(table.headers, vec!["ticker", "total"]);
    assert_eq!(table.rows[1], vec!["MSFT", "N/A"]);
}

#[test]
fn overlapping_fetches_last_resolved_wins() {
    let transport = Scripted::default();
    transport.respond("/esg_api/msci_table", Ok(r#"[{"n":1}]"#));
    transport.respond("/esg_api/lseg_table", Ok(r#"[{"n":2}]"#));

    let mut app = app(ViewTab::Table);
    app.table.table.select(Some(TableName::Msci));
    let first = app.trigger_fetch().expect("first fetch");
    app.table.table.select(Some(TableName::Lseg));
    let second = app.trigger_fetch().expect("second fetch");
    assert_eq!(app.table.in_flight(), 2);

    // The newer request resolves first, then the older one lands on top
    app.apply_completion(complete(&transport, second));
    assert_eq!(
        app.apply_completion(complete(&transport, first)),
        ApplyOutcome::Applied
    );

    let shown = app.table.query.shown_params().and_then(|p| p.table());
    assert_eq!(shown, Some(TableName::Msci));
    assert_eq!(app.table.in_flight(), 0);
}

#[test]
fn overlapping_fetches_can_discard_stale() {
    let transport = Scripted::default();
    transport.respond("/esg_api/msci_table", Ok(r#"[{"n":1}]"#));
    transport.respond("/esg_api/lseg_table", Ok(r#"[{"n":2}]"#));

    let mut app = App::new(ViewTab::Table, StalePolicy::LatestIssued, "http://localhost:5000");
    app.table.table.select(Some(TableName::Msci));
    let first = app.trigger_fetch().expect("first fetch");
    app.table.table.select(Some(TableName::Lseg));
    let second = app.trigger_fetch().expect("second fetch");

    app.apply_completion(complete(&transport, second));
    assert_eq!(
        app.apply_completion(complete(&transport, first)),
        ApplyOutcome::DroppedStale
    );
    let shown = app.table.query.shown_params().and_then(|p| p.table());
    assert_eq!(shown, Some(TableName::Lseg));
}

#[test]
fn leaving_and_returning_resets_view() {
    let transport = Scripted::default();
    transport.respond("/esg_api/csrhub_table", Ok("[]"));

    let mut app = app(ViewTab::Table);
    app.table.table.select(Some(TableName::Csrhub));
    let request = app.trigger_fetch().expect("fetch issued");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab, ViewTab::CompanyTable);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_tab, ViewTab::Table);

    assert_eq!(app.table.table.selected(), None);
    assert_eq!(*app.table.query.result(), QueryResult::Idle);

    // The fetch issued before the reset must not repopulate the view
    assert_eq!(
        app.apply_completion(complete(&transport, request)),
        ApplyOutcome::DroppedReset
    );
    assert_eq!(*app.table.query.result(), QueryResult::Idle);
}

#[test]
fn completion_for_inactive_view_is_kept() {
    let transport = Scripted::default();
    transport.respond("/esg_api/all_tables/IBM", Ok(r#"{"yahoo":{"total":12}}"#));

    let mut app = app(ViewTab::CompanyScores);
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "ibm");
    let request = press(&mut app, KeyCode::Enter).expect("fetch issued");

    // Jumping straight to another tab does not reset the one left behind
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_tab, ViewTab::Table);
    assert_eq!(
        app.apply_completion(complete(&transport, request)),
        ApplyOutcome::Applied
    );
    assert!(app.scores.query.result().success().is_some());
}

#[test]
fn digits_and_q_are_text_while_editing() {
    let mut app = app(ViewTab::CompanyScores);
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "q2");
    assert!(!app.should_quit);
    assert_eq!(app.active_tab, ViewTab::CompanyScores);
    assert_eq!(app.scores.ticker.text(), "Q2");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
