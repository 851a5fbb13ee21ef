//! Terminal setup, main loop, and frame layout.

use super::app::{App, ViewTab};
use super::events::{handle_key_event, Event, EventHandler};
use super::status::StatusKind;
use super::theme::{colors, global_shortcuts, render_footer_hints, Styles};
use super::views;
use super::widgets::{centered_rect, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::api::EsgTransport;
use crate::query::{ApplyOutcome, QueryDispatcher};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

/// Run the explorer until the user quits.
///
/// Fetches run on worker threads through `transport`; their completions come
/// back on the same channel as terminal input.
pub fn run_tui(app: &mut App, transport: Arc<dyn EsgTransport>, tick_rate: Duration) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, transport, tick_rate);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    transport: Arc<dyn EsgTransport>,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);
    let dispatcher = QueryDispatcher::new(transport, events.sender());

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => {
                if let Some(request) = handle_key_event(app, key) {
                    dispatcher.dispatch(request);
                }
            }
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick = app.tick.wrapping_add(1);
                app.status.expire();
            }
            Event::Fetched(completion) => {
                let path = completion.path.clone();
                if app.apply_completion(completion) != ApplyOutcome::Applied {
                    tracing::debug!("ignored completion for {}", path);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, tabs, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    views::render_active_view(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("esg-explorer", Styles::header_title()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(app.api_url.as_str(), Styles::text_muted()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(app.active_tab.route(), Style::default().fg(colors().accent)),
    ]));
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    // "[n] label " plus Tabs padding, and a divider between tabs
    let full_width: usize = ViewTab::ALL.iter().map(|tab| tab.label().len() + 7).sum::<usize>() + 6;
    let compact = full_width > usize::from(area.width);

    let titles: Vec<Line> = ViewTab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == app.active_tab {
                Style::default().fg(colors().accent).bold()
            } else {
                Style::default().fg(colors().text_muted)
            };
            let label = if compact { tab.short_label() } else { tab.label() };
            Line::from(vec![
                Span::styled(format!("[{}]", tab.shortcut()), style),
                Span::styled(format!(" {label} "), style),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        )
        .highlight_style(Style::default().fg(colors().accent))
        .select(app.active_tab.index())
        .divider(Span::styled(" │ ", Style::default().fg(colors().muted)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.active_view();
    let separator = Span::styled(" │ ", Style::default().fg(colors().muted));
    let mut spans = Vec::new();

    if let Some(stats) = view.stats() {
        spans.push(Span::styled(" GET ", Styles::text_muted()));
        spans.push(Span::styled(stats.path.to_string(), Styles::text()));
        spans.push(separator.clone());
        spans.push(Span::styled(
            format!("{} ms", stats.elapsed.as_millis()),
            Style::default().fg(colors().primary),
        ));
        spans.push(separator.clone());
        spans.push(Span::styled(
            stats.completed_at.format("%H:%M:%S").to_string(),
            Styles::text_muted(),
        ));
    } else {
        spans.push(Span::styled(" No request yet", Styles::text_muted()));
    }

    let pending = view.in_flight();
    if pending > 0 {
        spans.push(separator);
        spans.push(Span::styled(
            format!(" {pending} in flight "),
            Style::default()
                .fg(colors().badge_fg)
                .bg(colors().accent)
                .bold(),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if let Some((msg, kind)) = app.status.peek() {
        let color = match kind {
            StatusKind::Info => colors().accent,
            StatusKind::Warning => colors().warning,
        };
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(color)),
            Span::styled(msg.to_string(), Style::default().fg(color).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let view = app.active_view();
    let mut hints = view.shortcuts();
    if !view.is_editing() {
        hints.extend(global_shortcuts());
    }

    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

fn help_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<15}"), Style::default().fg(colors().accent)),
        Span::styled(description, Styles::text()),
    ])
}

fn help_section(title: &'static str) -> Line<'static> {
    Line::styled(title, Style::default().fg(colors().primary).bold())
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(65, 80, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ ESG Explorer Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        help_section("Navigation"),
        help_line("1-3", "Jump to view (Scores / Table / Company in table)"),
        help_line("Tab", "Next view / Shift+Tab previous view"),
        help_line("↑/↓ or j/k", "Scroll results or move the row selection"),
        help_line("PgUp/PgDown", "Page up/down"),
        help_line("Home/End", "First/last"),
        help_line("←/→ or h/l", "Scroll table columns"),
        Line::from(""),
        help_section("Inputs"),
        help_line("[ / ]", "Previous/next table"),
        help_line("i or /", "Edit the ticker (Esc to stop)"),
        help_line("Enter or f", "Fetch"),
        Line::from(""),
        help_section("General"),
        help_line("T", "Toggle theme (dark/light/high-contrast)"),
        help_line("?", "Toggle this help"),
        help_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::styled("Switching views clears the view you switch to.", Styles::text_muted()),
        Line::styled("Press Esc to close", Styles::text_muted()),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(colors().accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().accent)),
        )
        .style(Styles::text());

    frame.render_widget(help, popup_area);
}
