//! User-facing notifications
//!
//! The core never shows anything itself. When a request fails it reports a
//! short message through a [`Notifier`] and carries on with a fallback value;
//! the presentation layer decides how to surface it (toast, status bar, log).

use std::fmt;
use tracing::{error, info, warn};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Error,
    Warning,
    Info,
    Success,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NoticeLevel::Error => "error",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
        };
        f.write_str(label)
    }
}

/// Side-effect hook for user-visible messages
pub trait Notifier: Send + Sync + 'static {
    /// Deliver a message at the given level
    fn notify(&self, level: NoticeLevel, message: &str);

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.notify(NoticeLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }
}

/// Notifier that forwards messages to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => error!(target: "paddock::notify", "{message}"),
            NoticeLevel::Warning => warn!(target: "paddock::notify", "{message}"),
            NoticeLevel::Info | NoticeLevel::Success => {
                info!(target: "paddock::notify", level = %level, "{message}")
            }
        }
    }
}
