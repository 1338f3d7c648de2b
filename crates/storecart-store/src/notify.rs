//! User-facing notification sinks.

use std::sync::Mutex;

use tracing::warn;

/// Displays a user-facing error message. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    /// Show `message` to the user.
    fn notify_error(&self, message: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify_error(&self, message: &str) {
        self(message)
    }
}

/// Sink that only writes the message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify_error(&self, message: &str) {
        warn!(notification = message, "cart notification");
    }
}

/// Sink that keeps every message, for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Drain received messages.
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }
}

impl NotificationSink for MemoryNotifier {
    fn notify_error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
