//! Caller-callback adapter that records the exact invocation sequence.

use std::sync::Mutex;

use crate::app::ports::callbacks::ModalCallbacks;
use crate::domain::DatabaseRecord;

#[derive(Debug, Default)]
pub struct RecordingCallbacks {
    events: Mutex<Vec<String>>,
    saved: Mutex<Vec<Option<DatabaseRecord>>>,
}

impl RecordingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocation names in order, e.g. `["saved", "closed"]`.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("callback log poisoned").clone()
    }

    pub fn saved_records(&self) -> Vec<Option<DatabaseRecord>> {
        self.saved.lock().expect("callback log poisoned").clone()
    }
}

impl ModalCallbacks for RecordingCallbacks {
    fn on_saved(&self, record: Option<DatabaseRecord>) {
        self.events
            .lock()
            .expect("callback log poisoned")
            .push("saved".to_string());
        self.saved
            .lock()
            .expect("callback log poisoned")
            .push(record);
    }

    fn on_close(&self) {
        self.events
            .lock()
            .expect("callback log poisoned")
            .push("closed".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_invocations_in_order() {
        let callbacks = RecordingCallbacks::new();

        callbacks.on_saved(None);
        callbacks.on_close();

        assert_eq!(callbacks.events(), vec!["saved", "closed"]);
        assert_eq!(callbacks.saved_records(), vec![None]);
    }
}
