//! Transient user notices
//!
//! Auto-dismissing messages the presentation layer renders as toasts.
//! The session only queues them; dismissal timing is the renderer's
//! job, the durations here are the contract.

use std::time::Duration;

/// How long an informational notice stays visible.
pub const INFO_DISMISS: Duration = Duration::from_secs(3);

/// How long an error notice stays visible.
pub const ERROR_DISMISS: Duration = Duration::from_secs(5);

/// Notice kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation of a user action
    Info,
    /// A caught failure the user should know about
    Error,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice kind
    pub kind: NoticeKind,
    /// Message to render
    pub message: String,
    /// How long the notice stays visible
    pub dismiss_after: Duration,
}

impl Notice {
    /// Creates an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            dismiss_after: INFO_DISMISS,
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after: ERROR_DISMISS,
        }
    }
}
