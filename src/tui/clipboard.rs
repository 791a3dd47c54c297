//! System clipboard access and transient "Copied" feedback.

use std::time::{Duration, Instant};

use crate::constants::COPY_FEEDBACK_MS;

/// Writes `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when no clipboard is available (headless sessions,
/// missing display server).
pub fn copy_text(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
}

/// Status message that disappears after a fixed delay.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    message: Option<(String, Instant)>,
}

impl CopyFeedback {
    /// How long the message stays visible.
    pub const DURATION: Duration = Duration::from_millis(COPY_FEEDBACK_MS);

    /// Create empty feedback.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Show `Copied <what>` starting at `now`.
    pub fn show(&mut self, what: &str, now: Instant) {
        self.message = Some((format!("Copied {what}"), now));
    }

    /// Message to display at `now`, if it has not expired.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|(_, shown)| now.saturating_duration_since(*shown) < Self::DURATION)
            .map(|(text, _)| text.as_str())
    }

    /// Drop the message once it has expired.
    pub fn expire(&mut self, now: Instant) {
        if self.message(now).is_none() {
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_visible_until_timeout() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new();
        assert!(feedback.message(start).is_none());

        feedback.show("#FF0000", start);
        assert_eq!(feedback.message(start), Some("Copied #FF0000"));
        assert_eq!(
            feedback.message(start + Duration::from_millis(899)),
            Some("Copied #FF0000")
        );
        assert!(feedback
            .message(start + Duration::from_millis(900))
            .is_none());
    }

    #[test]
    fn test_expire_drops_message() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new();
        feedback.show("x", start);

        feedback.expire(start + Duration::from_millis(100));
        assert!(feedback.message(start + Duration::from_millis(100)).is_some());

        feedback.expire(start + Duration::from_secs(1));
        assert!(feedback.message(start).is_none());
    }

    #[test]
    fn test_new_copy_restarts_timer() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new();
        feedback.show("a", start);
        let later = start + Duration::from_millis(800);
        feedback.show("b", later);
        assert_eq!(
            feedback.message(later + Duration::from_millis(500)),
            Some("Copied b")
        );
    }
}
