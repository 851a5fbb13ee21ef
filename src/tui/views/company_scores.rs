//! All ESG scores for one company, grouped by source.

use crate::render::ScoreBlocks;
use crate::tui::app::ViewTab;
use crate::tui::app_states::CompanyScoresView;
use crate::tui::theme::Styles;
use crate::tui::traits::ViewState;
use crate::tui::widgets::{render_button, render_empty_state, render_input};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn render_inputs(frame: &mut Frame, area: Rect, view: &CompanyScoresView) {
    let [input, button] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(22)]).areas(area);

    render_input(
        frame,
        input,
        "Ticker",
        view.ticker.text(),
        "Enter Company Ticker",
        view.ticker.is_editing(),
    );
    render_button(
        frame,
        button,
        ViewTab::CompanyScores.action(),
        view.params().is_some(),
    );
}

pub(super) fn render_scores(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    scores: &ScoreBlocks,
    view: &CompanyScoresView,
) {
    if scores.blocks.is_empty() {
        render_empty_state(frame, area, &format!("{title}: no sources returned"), None);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(scores.line_count());
    for block in &scores.blocks {
        lines.push(Line::styled(block.source.clone(), Styles::section_title()));
        lines.extend(
            block
                .body
                .lines()
                .map(|line| Line::styled(format!("  {line}"), Styles::text())),
        );
        lines.push(Line::from(""));
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
