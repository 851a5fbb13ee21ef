//! Event loop plumbing and key handling.

use super::app::{App, ViewTab};
use super::theme::toggle_theme;
use super::traits::EventResult;
use crate::query::{FetchCompletion, FetchRequest};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Everything the UI thread reacts to.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A background fetch finished
    Fetched(FetchCompletion),
}

impl From<FetchCompletion> for Event {
    fn from(completion: FetchCompletion) -> Self {
        Self::Fetched(completion)
    }
}

/// Terminal input thread plus the channel fetch workers report on.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    _ => continue,
                }
            } else {
                Event::Tick
            };
            if event_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// Sender for fetch workers.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle a key press. Returns a request when the key started a fetch.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter) {
            app.show_help = false;
        }
        return None;
    }

    app.status.clear();

    // A view capturing text gets first refusal on every key
    if app.active_view().is_editing() {
        let result = app.active_view_mut().handle_key(key);
        if result != EventResult::Ignored {
            return apply_result(app, result);
        }
        return handle_navigation(app, key.code);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            None
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            None
        }
        KeyCode::Char('T') => {
            let name = toggle_theme();
            app.status.info(format!("Theme: {name}"));
            None
        }
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = ViewTab::ALL.into_iter().find(|tab| tab.shortcut() == c) {
                app.select_tab(tab);
            }
            None
        }
        code @ (KeyCode::Tab | KeyCode::BackTab) => handle_navigation(app, code),
        _ => {
            let result = app.active_view_mut().handle_key(key);
            apply_result(app, result)
        }
    }
}

fn handle_navigation(app: &mut App, code: KeyCode) -> Option<FetchRequest> {
    match code {
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        _ => {}
    }
    None
}

fn apply_result(app: &mut App, result: EventResult) -> Option<FetchRequest> {
    match result {
        EventResult::Fetch => app.trigger_fetch(),
        EventResult::Consumed | EventResult::Ignored => None,
    }
}
