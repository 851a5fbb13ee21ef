//! Drawing for the three query views.
//!
//! Every view has the same frame: a heading, a row of inputs ending in the
//! fetch button, and a result area. The result area shows exactly one of
//! idle hint, spinner, error block or payload.

mod company_scores;
mod company_table;
mod table;

use super::app::{App, ViewTab};
use super::theme::Styles;
use super::widgets::{render_empty_state, render_error_state, render_loading_state};
use crate::query::ViewQuery;
use crate::render::{display, result_title, Render, ResultDisplay};
use ratatui::{prelude::*, widgets::Paragraph};

/// Draw the active view into `area`.
pub fn render_active_view(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Inputs
            Constraint::Min(5),    // Result
        ])
        .split(area);

    let heading = Paragraph::new(Line::styled(
        format!(" {}", app.active_tab.heading()),
        Styles::section_title(),
    ));
    frame.render_widget(heading, chunks[0]);

    match app.active_tab {
        ViewTab::CompanyScores => {
            company_scores::render_inputs(frame, chunks[1], &app.scores);
            render_result(frame, chunks[2], app.tick, &app.scores.query, |frame, area, title, blocks| {
                company_scores::render_scores(frame, area, title, &blocks, &app.scores);
            });
        }
        ViewTab::Table => {
            table::render_inputs(frame, chunks[1], &app.table);
            render_result(frame, chunks[2], app.tick, &app.table.query, |frame, area, title, rows| {
                table::render_rows(frame, area, title, &rows, &app.table);
            });
        }
        ViewTab::CompanyTable => {
            company_table::render_inputs(frame, chunks[1], &app.company_table);
            render_result(
                frame,
                chunks[2],
                app.tick,
                &app.company_table.query,
                |frame, area, title, rows| {
                    company_table::render_records(frame, area, title, &rows, &app.company_table);
                },
            );
        }
    }
}

/// Draw whichever state `query` is in. `ready` draws a successful payload
/// under its title.
fn render_result<T, F>(frame: &mut Frame, area: Rect, tick: u64, query: &ViewQuery<T>, ready: F)
where
    T: Render,
    F: FnOnce(&mut Frame, Rect, &str, T::Output),
{
    match display(query.result()) {
        ResultDisplay::Idle => render_empty_state(
            frame,
            area,
            "No data loaded",
            Some("Fill in the fields above and press [Enter]"),
        ),
        ResultDisplay::Pending => render_loading_state(frame, area, "Fetching...", tick),
        ResultDisplay::Error(message) => {
            let [banner, _] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
            render_error_state(frame, banner, &message);
        }
        ResultDisplay::Ready(output) => {
            let title = query.shown_params().map(result_title).unwrap_or_default();
            ready(frame, area, &title, output);
        }
    }
}
