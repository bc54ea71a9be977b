//! User-facing success notifications.
//!
//! Engines announce completed mutations ("Optimization deleted", "Settings
//! saved") through this trait so the presentation layer can render them as
//! toasts. Failures are not notifications; they surface as errors on the
//! operation itself.

use std::sync::Mutex;

/// Sink for user-visible success messages.
pub trait Notifier: Send + Sync {
    /// Surface a short success message to the user.
    fn success(&self, message: &str);
}

/// Notifier that forwards messages to the log. The default sink when the
/// console runs headless.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "notification");
    }
}

/// Notifier that records every message for later inspection. Used by tests
/// and by embedders that render their own toasts after the fact.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Drain the recorded messages, leaving the recorder empty.
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
