//! TUI trait abstractions for view state management.
//!
//! Each query view implements [`ViewState`] to handle its own keys, input
//! state and query lifecycle. The `App` acts as an orchestrator that:
//! - Handles global keys (quit, help, tab switching, theme)
//! - Dispatches the remaining keys to the active view
//! - Turns [`EventResult::Fetch`] into a dispatched request
//! - Routes completions back to the view they were issued by

use crate::api::QueryParams;
use crate::query::{ApplyOutcome, FetchCompletion, FetchRequest, FetchStats};
use crossterm::event::KeyEvent;

/// Result of handling an event in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by this view
    Consumed,
    /// Event was not handled, let parent process it
    Ignored,
    /// The user pressed the view's fetch button
    Fetch,
}

/// A keyboard shortcut for display in the footer and help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Key sequence (e.g., "j/k", "Tab", "Enter")
    pub key: &'static str,
    /// Brief description (e.g., "scroll", "fetch")
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// State machine for one query view.
///
/// # Event Flow
///
/// 1. App receives event from terminal
/// 2. App checks for global handlers (quit, help, tabs) unless the view is
///    capturing text input
/// 3. App dispatches to the active view's `handle_key`
/// 4. On [`EventResult::Fetch`] the App asks [`ViewState::params`] for the
///    request parameters and either starts the fetch or shows
///    [`ViewState::missing_input_hint`]
pub trait ViewState {
    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> EventResult;

    /// Whether the view is capturing raw text input.
    fn is_editing(&self) -> bool {
        false
    }

    /// Parameters for a fetch, or `None` while a required input is empty.
    fn params(&self) -> Option<QueryParams>;

    /// Footer hint shown when a fetch is attempted without every input.
    fn missing_input_hint(&self) -> &'static str;

    /// Move to `Pending` and issue a request ticket.
    fn begin(&mut self, params: QueryParams) -> FetchRequest;

    /// Fold a completion for this view into its state.
    fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome;

    /// Return to the freshly opened state, disowning in-flight fetches.
    fn reset(&mut self);

    /// Fetches still outstanding in the current generation.
    fn in_flight(&self) -> usize;

    /// Timing of the result on display.
    fn stats(&self) -> Option<&FetchStats>;

    /// View-specific keyboard shortcuts.
    fn shortcuts(&self) -> Vec<Shortcut>;
}
