//! Reusable widgets for the query views.

use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h,
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a loading state with spinner animation.
pub fn render_loading_state(frame: &mut Frame, area: Rect, message: &str, tick: u64) {
    const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let spinner = SPINNER[(tick as usize) % SPINNER.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {spinner} "), Style::default().fg(colors().primary)),
            Span::styled(message, Style::default().fg(colors().text)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a fetch failure: the message alone in a red-bordered block.
pub fn render_error_state(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(colors().error).bold()),
        Span::styled(message, Style::default().fg(colors().error).bold()),
    ]))
    .block(
        Block::default()
            .title(" Error ")
            .title_style(Styles::error().bold())
            .borders(Borders::ALL)
            .border_style(Styles::error()),
    )
    .style(Style::default().bg(colors().error_bg))
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// A labelled single-line input box.
///
/// An empty value shows `placeholder` in the muted style. `focused` draws
/// the focused border and a cursor.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder.to_string(), Styles::text_muted().italic())]
    } else {
        vec![Span::styled(value.to_string(), Styles::text().bold())]
    };
    if focused {
        spans.push(Span::styled("│", Style::default().fg(colors().accent)));
    }

    let border = if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(input, area);
}

/// The fetch button, greyed out while it cannot be pressed.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Styles::button()
    } else {
        Styles::button_disabled()
    };
    let button = Paragraph::new(Line::styled(format!("[Enter] {label}"), style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border()));

    frame.render_widget(button, area);
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string to `max_width` display columns, ending in "..." when
/// anything was cut.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let keep = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > keep {
                return false;
            }
            width += w;
            true
        })
        .collect();

    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning().bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::warning()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Score", 10), "Score");
        assert_eq!(truncate_str("Environmental", 8), "Envir...");
        assert_eq!(truncate_str("Environmental", 3), "Env");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate_str("株式会社テスト", 7), "株式...");
    }

    #[test]
    fn test_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 30), Err((80, 24)));
    }
}
