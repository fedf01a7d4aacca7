use serde::Serialize;
use serde_json::Value;

use crate::domain::record::DraftRecord;

/// Payload handed to the connection tester. Optional members are omitted
/// outright when falsy instead of being sent as "" or `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestConnectionPayload {
    pub sqlalchemy_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impersonate_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_cert: Option<String>,
}

impl TestConnectionPayload {
    pub fn from_draft(draft: &DraftRecord) -> Self {
        let name = draft.database_name.trim();
        Self {
            sqlalchemy_uri: draft.sqlalchemy_uri.clone(),
            database_name: (!name.is_empty()).then(|| name.to_string()),
            impersonate_user: draft.impersonate_user.filter(|flag| *flag),
            extra: draft.extra.clone().filter(|v| !v.is_null()),
            encrypted_extra: draft.encrypted_extra.clone().filter(|v| !v.is_null()),
            server_cert: draft.server_cert.clone().filter(|cert| !cert.is_empty()),
        }
    }
}

/// Body of an update call. Identifiers travel as path parameters in the
/// update contract, so the draft's `id` is stripped here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
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

impl UpdatePayload {
    pub fn from_draft(draft: &DraftRecord) -> Self {
        Self {
            database_name: draft.database_name.clone(),
            sqlalchemy_uri: draft.sqlalchemy_uri.clone(),
            backend: draft.backend.clone(),
            impersonate_user: draft.impersonate_user,
            extra: draft.extra.clone(),
            encrypted_extra: draft.encrypted_extra.clone(),
            server_cert: draft.server_cert.clone(),
        }
    }
}
