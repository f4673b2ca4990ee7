//! Transient user notifications.
//!
//! The Rust rendering of the snackbar: notices auto-expire after a short
//! interval and are otherwise fire-and-forget. Views post here on submit
//! failures; whatever renders the UI polls `active()`.

use async_lock::Mutex;
use std::time::{Duration, Instant};

/// How long a notice stays visible by default.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    severity: Severity,
    posted_at: Instant,
}

impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Process-wide notice queue with auto-dismiss.
pub struct NoticeCenter {
    dismiss_after: Duration,
    notices: Mutex<Vec<Notice>>,
}

impl NoticeCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.post(message, Severity::Info);
    }

    fn post(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(%message, "posting notice");
        self.notices.lock_blocking().push(Notice {
            message,
            severity,
            posted_at: Instant::now(),
        });
    }

    /// Notices still within their display window, oldest first.
    /// Expired notices are pruned as a side effect.
    pub fn active(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock_blocking();
        notices.retain(|n| n.posted_at.elapsed() < self.dismiss_after);
        notices.clone()
    }

    pub fn dismiss_all(&self) {
        self.notices.lock_blocking().clear();
    }
}

impl Default for NoticeCenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posted_notice_is_active() {
        let center = NoticeCenter::default();
        center.error("boom");
        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message(), "boom");
        assert_eq!(active[0].severity(), Severity::Error);
    }

    #[test]
    fn test_notices_expire() {
        let center = NoticeCenter::new(Duration::ZERO);
        center.info("gone already");
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_dismiss_all() {
        let center = NoticeCenter::default();
        center.error("one");
        center.error("two");
        center.dismiss_all();
        assert!(center.active().is_empty());
    }
}
