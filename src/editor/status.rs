//! Transient status messages.

use std::time::{Duration, Instant};

/// A message for the message bar, stamped with when it was set.
#[derive(Clone, Debug)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Instant::now())
    }

    /// Create a message stamped with an explicit time.
    #[must_use]
    pub fn at(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the message is still younger than `timeout` at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < timeout
    }

    #[must_use]
    pub fn is_visible(&self, timeout: Duration) -> bool {
        self.is_visible_at(Instant::now(), timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_window() {
        let start = Instant::now();
        let msg = StatusMessage::at("saved", start);
        let timeout = Duration::from_secs(5);

        assert!(msg.is_visible_at(start, timeout));
        assert!(msg.is_visible_at(start + Duration::from_millis(4999), timeout));
        assert!(!msg.is_visible_at(start + timeout, timeout));
        assert!(!msg.is_visible_at(start + Duration::from_secs(60), timeout));
    }

    #[test]
    fn test_fresh_message_is_visible() {
        let msg = StatusMessage::new("hello");
        assert_eq!(msg.text(), "hello");
        assert!(msg.is_visible(Duration::from_secs(5)));
    }
}
