//! Transient, non-blocking notices shown in the status bar.

use std::time::{Duration, Instant};

/// Shown when the user submits a blank task name.
pub const BLANK_TASK_NOTICE: &str = "Please enter a task name";

/// How long a notice stays up unless configured otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// A short-lived message with an expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    expires_at: Instant,
}

impl Notice {
    /// Create a notice shown from `now` for `duration`.
    #[must_use]
    pub fn new(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now.checked_add(duration).unwrap_or(now),
        }
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the notice should be gone at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
