//! State types for the query views.
//!
//! Each view owns its inputs, its [`ViewQuery`](crate::query::ViewQuery)
//! and its scroll position. Nothing here is shared between views.

mod company_table;
mod input;
mod scores;
mod table;

pub use company_table::CompanyTableView;
pub use input::{TableSelector, TickerInput};
pub use scores::CompanyScoresView;
pub use table::TableView;

use super::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved by PgUp/PgDn.
pub const PAGE_SIZE: usize = 10;

/// Vertical position within a result, clamped to its length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset: usize,
}

impl Scroll {
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub fn up(&mut self, by: usize) {
        self.offset = self.offset.saturating_sub(by);
    }

    /// Move down, never past `last`.
    pub fn down(&mut self, by: usize, last: usize) {
        self.offset = (self.offset + by).min(last);
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self, last: usize) {
        self.offset = last;
    }

    /// Shared key bindings for vertical scrolling over `len` positions.
    pub fn handle_key(&mut self, code: KeyCode, len: usize) -> EventResult {
        let last = len.saturating_sub(1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.up(1),
            KeyCode::Down | KeyCode::Char('j') => self.down(1, last),
            KeyCode::PageUp => self.up(PAGE_SIZE),
            KeyCode::PageDown => self.down(PAGE_SIZE, last),
            KeyCode::Home | KeyCode::Char('g') => self.home(),
            KeyCode::End | KeyCode::Char('G') => self.end(last),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

/// Text entry for a ticker field that is being edited.
///
/// Enter leaves the field and presses the fetch button. Keys the field does
/// not use (Tab, Ctrl combinations) fall through to the shell.
pub(crate) fn edit_ticker(input: &mut TickerInput, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            input.stop_editing();
            EventResult::Consumed
        }
        KeyCode::Enter => {
            input.stop_editing();
            EventResult::Fetch
        }
        KeyCode::Backspace => {
            input.pop();
            EventResult::Consumed
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.push(c);
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut scroll = Scroll::default();
        assert_eq!(scroll.handle_key(KeyCode::PageDown, 4), EventResult::Consumed);
        assert_eq!(scroll.offset(), 3);
        scroll.handle_key(KeyCode::Up, 4);
        assert_eq!(scroll.offset(), 2);
        scroll.handle_key(KeyCode::Home, 4);
        assert_eq!(scroll.offset(), 0);
        scroll.handle_key(KeyCode::Up, 4);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.handle_key(KeyCode::Enter, 4), EventResult::Ignored);
    }

    #[test]
    fn test_scroll_over_empty_content() {
        let mut scroll = Scroll::default();
        scroll.handle_key(KeyCode::End, 0);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_edit_ticker_keys() {
        let mut input = TickerInput::new();
        input.start_editing();

        assert_eq!(edit_ticker(&mut input, key(KeyCode::Char('m'))), EventResult::Consumed);
        assert_eq!(edit_ticker(&mut input, key(KeyCode::Char('1'))), EventResult::Consumed);
        assert_eq!(input.text(), "M1");
        assert_eq!(edit_ticker(&mut input, key(KeyCode::Tab)), EventResult::Ignored);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(edit_ticker(&mut input, ctrl_c), EventResult::Ignored);

        assert_eq!(edit_ticker(&mut input, key(KeyCode::Enter)), EventResult::Fetch);
        assert!(!input.is_editing());
    }
}
