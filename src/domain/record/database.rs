use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::DatabaseId;

/// Full database-connection record as returned by the backend resource.
///
/// A strict superset of what list views carry: list rows have at most
/// `id`, `database_name`, `sqlalchemy_uri`, and `backend`; the detail
/// fetch additionally fills the impersonation flag, the extra blobs, and
/// the server certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DatabaseId>,
    pub database_name: String,
    pub sqlalchemy_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impersonate_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_cert: Option<String>,
}
