//! Interactive terminal UI built on ratatui.
//!
//! The explorer is a navigation shell ([`App`]) holding three independent
//! query views, one per route. Each view implements [`ViewState`], so the
//! shell can route keys, fetch triggers and completions without knowing
//! which view it is talking to.
//!
//! # Architecture
//!
//! - `app_states` holds per-view input and result state
//! - `views` draws that state; it never mutates it
//! - `events` turns terminal input into state changes and fetch requests
//! - `ui` owns the terminal and the event loop

pub mod app;
pub mod app_states;
mod events;
pub mod status;
pub mod theme;
pub mod traits;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{App, ViewTab};
pub use events::{handle_key_event, Event};
pub use status::{StatusKind, StatusMessage};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Styles, Theme};
pub use traits::{EventResult, Shortcut, ViewState};
pub use ui::{render, run_tui};
