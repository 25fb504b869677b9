//! User-facing notification sink.

use std::time::Duration;

/// How long a toast stays up unless dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// How long a detailed panel stays up unless dismissed.
pub const PANEL_DURATION: Duration = Duration::from_secs(8);

/// Short-lived, auto-dismissing error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
    pub closable: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DURATION,
            closable: true,
        }
    }
}

/// Longer-lived, titled error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub message: String,
    pub duration: Duration,
    pub closable: bool,
}

impl Panel {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            duration: PANEL_DURATION,
            closable: true,
        }
    }
}

/// Where error notifications are displayed.
///
/// The client calls exactly one of these per failed request.
pub trait Notifier: Send + Sync {
    fn toast(&self, toast: &Toast);
    fn panel(&self, panel: &Panel);
}

/// Notifier that writes notifications to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn toast(&self, toast: &Toast) {
        tracing::warn!(duration_ms = toast.duration.as_millis() as u64, "{}", toast.message);
    }

    fn panel(&self, panel: &Panel) {
        tracing::warn!(
            duration_ms = panel.duration.as_millis() as u64,
            "{}: {}",
            panel.title,
            panel.message
        );
    }
}
