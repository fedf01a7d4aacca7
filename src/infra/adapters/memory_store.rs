//! In-memory resource client, backing tests and headless embeddings that
//! have no admin backend to talk to.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::app::ports::resource_client::{ResourceClient, ResourceError};
use crate::domain::{DatabaseId, DatabaseRecord, DraftRecord, UpdatePayload};

pub struct InMemoryResourceStore {
    records: Mutex<HashMap<DatabaseId, DatabaseRecord>>,
    next_id: AtomicI64,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Pre-populates a record, assigning an identifier if it has none.
    pub fn seed(&self, mut record: DatabaseRecord) -> DatabaseId {
        let id = record.id.unwrap_or_else(|| self.allocate_id());
        record.id = Some(id);
        self.records
            .lock()
            .expect("record map poisoned")
            .insert(id, record);
        id
    }

    pub fn get(&self, id: DatabaseId) -> Option<DatabaseRecord> {
        self.records
            .lock()
            .expect("record map poisoned")
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("record map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate_id(&self) -> DatabaseId {
        DatabaseId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceClient for InMemoryResourceStore {
    async fn fetch_by_id(&self, id: DatabaseId) -> Result<DatabaseRecord, ResourceError> {
        self.get(id)
            .ok_or_else(|| ResourceError::NotFound(format!("database connection {}", id)))
    }

    async fn create(&self, draft: &DraftRecord) -> Result<DatabaseId, ResourceError> {
        let id = self.allocate_id();
        let record = DatabaseRecord {
            id: Some(id),
            database_name: draft.database_name.clone(),
            sqlalchemy_uri: draft.sqlalchemy_uri.clone(),
            backend: draft.backend.clone(),
            impersonate_user: draft.impersonate_user,
            extra: draft.extra.clone(),
            encrypted_extra: draft.encrypted_extra.clone(),
            server_cert: draft.server_cert.clone(),
        };
        self.records
            .lock()
            .expect("record map poisoned")
            .insert(id, record);
        tracing::debug!(%id, "record created");
        Ok(id)
    }

    async fn update(
        &self,
        id: DatabaseId,
        payload: &UpdatePayload,
    ) -> Result<DatabaseRecord, ResourceError> {
        let mut records = self.records.lock().expect("record map poisoned");
        let record = records
            .get_mut(&id)
            .ok_or_else(|| ResourceError::NotFound(format!("database connection {}", id)))?;

        record.database_name = payload.database_name.clone();
        record.sqlalchemy_uri = payload.sqlalchemy_uri.clone();
        if payload.backend.is_some() {
            record.backend = payload.backend.clone();
        }
        if payload.impersonate_user.is_some() {
            record.impersonate_user = payload.impersonate_user;
        }
        if payload.extra.is_some() {
            record.extra = payload.extra.clone();
        }
        if payload.encrypted_extra.is_some() {
            record.encrypted_extra = payload.encrypted_extra.clone();
        }
        if payload.server_cert.is_some() {
            record.server_cert = payload.server_cert.clone();
        }
        Ok(record.clone())
    }
}
