use std::sync::Arc;

use serde_json::json;

use dbmodal::app::{ModalController, SharedConfig};
use dbmodal::domain::{DatabaseId, DatabaseRecord};
use dbmodal::infra::adapters::{
    InMemoryResourceStore, MemoryNotifier, RecordingCallbacks, UriProbeTester,
};

pub struct TestModal {
    pub controller: ModalController,
    pub store: Arc<InMemoryResourceStore>,
    pub notifier: Arc<MemoryNotifier>,
    pub callbacks: Arc<RecordingCallbacks>,
}

pub fn create_test_modal() -> TestModal {
    let store = Arc::new(InMemoryResourceStore::new());
    let notifier = Arc::new(MemoryNotifier::new());
    let callbacks = Arc::new(RecordingCallbacks::new());
    let controller = ModalController::new(
        Arc::clone(&store) as _,
        Arc::new(UriProbeTester::new()),
        Arc::clone(&notifier) as _,
        Arc::clone(&callbacks) as _,
        SharedConfig::empty(),
    );
    TestModal {
        controller,
        store,
        notifier,
        callbacks,
    }
}

/// Partial record as a list view would pass it to the modal.
pub fn list_record(id: i64) -> DatabaseRecord {
    DatabaseRecord {
        id: Some(DatabaseId::new(id)),
        database_name: "Prod".to_string(),
        sqlalchemy_uri: "mysql://h/db".to_string(),
        backend: Some("mysql".to_string()),
        ..Default::default()
    }
}

/// Full record as the backend detail fetch returns it.
pub fn stored_record(id: i64) -> DatabaseRecord {
    DatabaseRecord {
        impersonate_user: Some(true),
        extra: Some(json!({"engine_params": {"pool_size": 5}})),
        encrypted_extra: Some(json!({"credentials": "s3cret"})),
        server_cert: Some("CERT".to_string()),
        sqlalchemy_uri: "mysql://h/db?charset=utf8".to_string(),
        ..list_record(id)
    }
}
