//! Notification model
//!
//! Transient feedback shown in the status bar after an action

use std::time::{Duration, Instant};

/// How long a notification stays visible
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Command completed (green)
    Success,
    /// Informational (cyan)
    Info,
    /// Nothing happened, e.g. no selection (yellow)
    Warning,
    /// svn reported an error (red)
    Error,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Errors keep only the first line of multi-line stderr
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let first = message.lines().next().unwrap_or_default().trim().to_string();
        Self::new(first, NotificationKind::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}
