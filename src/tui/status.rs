//! Transient footer messages.

use std::time::{Duration, Instant};

/// How a status message is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// Footer message that replaces the key hints until it expires or the next
/// key is pressed.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    current: Option<(String, StatusKind)>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages expire `duration` after being set.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            current: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.set(msg.into(), StatusKind::Info);
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.set(msg.into(), StatusKind::Warning);
    }

    fn set(&mut self, msg: String, kind: StatusKind) {
        self.current = Some((msg, kind));
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.set_at = None;
    }

    /// Drop the message if it has expired. Called on every tick.
    pub fn expire(&mut self) {
        let expired = match (self.set_at, self.auto_clear_after) {
            (Some(set_at), Some(after)) => set_at.elapsed() >= after,
            _ => false,
        };
        if expired {
            self.clear();
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<(&str, StatusKind)> {
        self.current
            .as_ref()
            .map(|(msg, kind)| (msg.as_str(), *kind))
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_and_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.warn("Select a table first");
        assert_eq!(
            status.peek(),
            Some(("Select a table first", StatusKind::Warning))
        );

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(30));
        status.info("Theme: light");
        status.expire();
        assert!(status.has_message());

        thread::sleep(Duration::from_millis(40));
        status.expire();
        assert!(!status.has_message());
    }

    #[test]
    fn test_no_auto_clear_by_default() {
        let mut status = StatusMessage::new();
        status.info("kept");
        thread::sleep(Duration::from_millis(5));
        status.expire();
        assert!(status.has_message());
    }
}
