use async_trait::async_trait;

use crate::domain::{DatabaseId, DatabaseRecord, DraftRecord, UpdatePayload};

#[derive(Debug, Clone)]
pub enum ResourceError {
    NotFound(String),
    RequestFailed(String),
    InvalidResponse(String),
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "Not found: {}", what),
            Self::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ResourceError {}

/// Backend resource for database-connection records. All network and
/// persistence semantics live behind this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Full record by identifier, including fields list views omit.
    async fn fetch_by_id(&self, id: DatabaseId) -> Result<DatabaseRecord, ResourceError>;

    /// Persists a new record; returns the assigned identifier.
    async fn create(&self, draft: &DraftRecord) -> Result<DatabaseId, ResourceError>;

    /// Updates an existing record. The identifier travels as a path
    /// parameter; the payload carries no id.
    async fn update(
        &self,
        id: DatabaseId,
        payload: &UpdatePayload,
    ) -> Result<DatabaseRecord, ResourceError>;
}
