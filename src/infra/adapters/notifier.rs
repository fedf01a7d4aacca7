//! Notification sink that collects messages instead of rendering toasts.

use std::sync::Mutex;

use crate::app::ports::notifier::NotificationSink;

#[derive(Debug, Default)]
pub struct MemoryNotifier {
    errors: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("notifier poisoned").clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("notifier poisoned").clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.errors().last().cloned()
    }

    pub fn last_success(&self) -> Option<String> {
        self.successes().last().cloned()
    }
}

impl NotificationSink for MemoryNotifier {
    fn report_error(&self, message: &str) {
        tracing::warn!(message, "modal error notification");
        self.errors
            .lock()
            .expect("notifier poisoned")
            .push(message.to_string());
    }

    fn report_success(&self, message: &str) {
        self.successes
            .lock()
            .expect("notifier poisoned")
            .push(message.to_string());
    }
}
