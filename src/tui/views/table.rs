//! Whole-table view: rows in a scrollable grid.

use crate::render::RowTable;
use crate::tui::app::ViewTab;
use crate::tui::app_states::{TableSelector, TableView};
use crate::tui::theme::Styles;
use crate::tui::traits::ViewState;
use crate::tui::widgets::{render_button, render_empty_state, render_input, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

/// Widest a column is allowed to get, in display columns.
const MAX_COLUMN_WIDTH: usize = 30;

pub(super) fn render_inputs(frame: &mut Frame, area: Rect, view: &TableView) {
    let [selector, button] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(22)]).areas(area);

    let value = view.table.selected().map_or("", |t| t.label());
    render_input(
        frame,
        selector,
        "Table [ ]",
        value,
        TableSelector::PLACEHOLDER,
        false,
    );
    render_button(
        frame,
        button,
        ViewTab::Table.action(),
        view.params().is_some(),
    );
}

pub(super) fn render_rows(frame: &mut Frame, area: Rect, title: &str, table: &RowTable, view: &TableView) {
    if table.headers.is_empty() {
        render_empty_state(frame, area, &format!("{title}: table is empty"), None);
        return;
    }

    let first = view.column_offset.min(table.headers.len() - 1);
    let widths: Vec<usize> = table.column_widths(MAX_COLUMN_WIDTH)[first..].to_vec();

    let header = Row::new(
        table.headers[first..]
            .iter()
            .zip(&widths)
            .map(|(h, w)| Cell::from(truncate_str(h, *w))),
    )
    .style(Styles::label())
    .bottom_margin(1);

    let rows = table.rows.iter().map(|row| {
        Row::new(
            row[first..]
                .iter()
                .zip(&widths)
                .map(|(cell, w)| Cell::from(truncate_str(cell, *w))),
        )
        .style(Styles::text())
    });

    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|w| Constraint::Length(u16::try_from(*w).unwrap_or(u16::MAX)))
        .collect();

    let mut block_title = format!(" {title} ({} rows) ", table.rows.len());
    if first > 0 {
        block_title.push_str(&format!("◀ {first} columns hidden "));
    }

    let grid = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(block_title)
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .column_spacing(2)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(view.selected.offset()));
    frame.render_stateful_widget(grid, area, &mut state);
}
