//! One company's rows in one table, drawn as `field: value` cards.

use crate::render::RowTable;
use crate::tui::app::ViewTab;
use crate::tui::app_states::{CompanyTableView, TableSelector, TickerInput};
use crate::tui::theme::Styles;
use crate::tui::traits::ViewState;
use crate::tui::widgets::{render_button, render_empty_state, render_input};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn render_inputs(frame: &mut Frame, area: Rect, view: &CompanyTableView) {
    let [selector, ticker, button] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Min(20),
        Constraint::Length(22),
    ])
    .areas(area);

    let value = view.table.selected().map_or("", |t| t.label());
    render_input(
        frame,
        selector,
        "Table [ ]",
        value,
        TableSelector::PLACEHOLDER,
        false,
    );
    render_input(
        frame,
        ticker,
        "Ticker [i]",
        view.ticker.text(),
        TickerInput::PLACEHOLDER,
        view.ticker.is_editing(),
    );
    render_button(
        frame,
        button,
        ViewTab::CompanyTable.action(),
        view.params().is_some(),
    );
}

pub(super) fn render_records(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &RowTable,
    view: &CompanyTableView,
) {
    if table.is_empty() {
        render_empty_state(frame, area, &format!("{title}: no rows"), None);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(table.record_line_count());
    for record in table.records() {
        for (field, value) in record {
            lines.push(Line::from(vec![
                Span::styled(format!("{field}:"), Styles::label()),
                Span::raw(" "),
                Span::styled(value.to_string(), Styles::text()),
            ]));
        }
        lines.push(Line::styled("─".repeat(24), Styles::text_muted()));
    }

    let scroll = u16::try_from(view.scroll.offset()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
