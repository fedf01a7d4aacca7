use serde_json::Value;

use crate::app::modal_tab::ModalTab;
use crate::domain::{DatabaseId, DatabaseRecord};

/// Form fields the modal edits directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Uri,
    ImpersonateUser,
    ServerCert,
    Extra,
    EncryptedExtra,
}

/// Value carried by an input-element change. Checkbox controls report
/// their checked state instead of a string value.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Checkbox(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Caller props arriving as events
    Open { record: Option<Box<DatabaseRecord>> },
    Show,
    Cancel,

    SelectTab(ModalTab),

    // Draft edits
    TextChange { field: FormField, value: String },
    InputChange { field: FormField, value: InputValue },
    EditorChange { field: FormField, value: Value },

    // Detail fetch completion
    DetailFetched { generation: u64, record: Box<DatabaseRecord> },
    DetailFetchFailed { generation: u64, message: String },

    // Submission
    TestConnection,
    Save,
    CreateCompleted { id: DatabaseId },
    CreateFailed { message: String },
    UpdateCompleted { record: Box<DatabaseRecord> },
    UpdateFailed { message: String },
}
