// Success notification
// Shown at top center; closes on user action or after its auto-hide duration

use maud::{html, Markup};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    opened_at: Instant,
    auto_hide: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, opened_at: Instant, auto_hide: Duration) -> Self {
        Self {
            message: message.into(),
            opened_at,
            auto_hide,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn opened_at(&self) -> Instant {
        self.opened_at
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.opened_at) >= self.auto_hide
    }

    /// Time left before auto-hide, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.auto_hide
            .saturating_sub(now.saturating_duration_since(self.opened_at))
    }

    pub fn render(&self) -> Markup {
        html! {
            div.notification.notification-top-center role="status"
                data-auto-hide-ms=(self.auto_hide.as_millis() as u64) {
                div.alert.alert-success {
                    pre.notification-body { (self.message) }
                    button.notification-close type="submit" name="action" value="dismiss"
                        aria-label="Close" { "×" }
                }
            }
        }
    }
}
