//! Input widgets state: ticker text field and table selector.

use crate::api::{TableName, Ticker};

/// Text field for a company ticker.
///
/// Characters are uppercased as they are typed. The field only accepts
/// keystrokes while `editing` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerInput {
    text: String,
    editing: bool,
}

impl TickerInput {
    pub const PLACEHOLDER: &'static str = "Company Ticker";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.extend(c.to_uppercase());
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the contents, uppercasing like typed input.
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        text.chars().for_each(|c| self.push(c));
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ticker to query with, if the field is not blank.
    #[must_use]
    pub fn ticker(&self) -> Option<Ticker> {
        Ticker::new(&self.text)
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }
}

/// Drop-down style selector over the fixed set of tables.
///
/// `None` is the "Select a Table" entry; cycling passes through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSelector {
    selected: Option<TableName>,
}

impl TableSelector {
    pub const PLACEHOLDER: &'static str = "Select a Table";

    #[must_use]
    pub const fn selected(&self) -> Option<TableName> {
        self.selected
    }

    pub fn select(&mut self, table: Option<TableName>) {
        self.selected = table;
    }

    /// Move to the next entry, wrapping through the placeholder.
    pub fn next(&mut self) {
        self.selected = match self.position() {
            None => TableName::ALL.first().copied(),
            Some(i) => TableName::ALL.get(i + 1).copied(),
        };
    }

    /// Move to the previous entry, wrapping through the placeholder.
    pub fn prev(&mut self) {
        self.selected = match self.position() {
            None => TableName::ALL.last().copied(),
            Some(0) => None,
            Some(i) => TableName::ALL.get(i - 1).copied(),
        };
    }

    /// Text shown in the selector.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.selected.map_or(Self::PLACEHOLDER, TableName::label)
    }

    fn position(&self) -> Option<usize> {
        self.selected
            .and_then(|table| TableName::ALL.iter().position(|t| *t == table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_input_uppercases() {
        let mut input = TickerInput::new();
        for c in "brk.b".chars() {
            input.push(c);
        }
        assert_eq!(input.text(), "BRK.B");
        input.pop();
        assert_eq!(input.text(), "BRK.");
    }

    #[test]
    fn test_blank_ticker_is_none() {
        let mut input = TickerInput::new();
        assert!(input.ticker().is_none());
        input.set("   ");
        assert!(input.ticker().is_none());
        input.set(" aapl ");
        assert_eq!(input.ticker().map(|t| t.to_string()).as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TickerInput::new();
        input.push('\t');
        input.push('a');
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn test_selector_cycles_through_placeholder() {
        let mut selector = TableSelector::default();
        assert_eq!(selector.label(), "Select a Table");

        selector.next();
        assert_eq!(selector.selected(), Some(TableName::Csrhub));

        for _ in 0..4 {
            selector.next();
        }
        assert_eq!(selector.selected(), Some(TableName::Yahoo));

        selector.next();
        assert_eq!(selector.selected(), None);

        selector.prev();
        assert_eq!(selector.selected(), Some(TableName::Yahoo));
        assert_eq!(selector.label(), "Yahoo Table");
    }

    #[test]
    fn test_selector_prev_from_first_is_placeholder() {
        let mut selector = TableSelector::default();
        selector.select(Some(TableName::Csrhub));
        selector.prev();
        assert_eq!(selector.selected(), None);
    }
}
