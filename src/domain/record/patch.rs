use serde_json::Value;

use super::database::DatabaseRecord;
use super::draft::DraftRecord;
use super::id::DatabaseId;

/// Partial overlay applied to a draft in one step.
///
/// Backs both bulk merges of the modal lifecycle: seeding the draft from
/// the caller-supplied record and splicing in the fields obtained from the
/// detail fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordPatch {
    pub id: Option<DatabaseId>,
    pub database_name: Option<String>,
    pub sqlalchemy_uri: Option<String>,
    pub backend: Option<String>,
    pub impersonate_user: Option<bool>,
    pub extra: Option<Value>,
    pub encrypted_extra: Option<Value>,
    pub server_cert: Option<String>,
}

impl RecordPatch {
    /// Seed patch covering every field the record carries. The name is
    /// trimmed here, so a draft derived from a caller record is already
    /// whitespace-clean.
    pub fn from_record(record: &DatabaseRecord) -> Self {
        Self {
            id: record.id,
            database_name: Some(record.database_name.trim().to_string()),
            sqlalchemy_uri: Some(record.sqlalchemy_uri.clone()),
            backend: record.backend.clone(),
            impersonate_user: record.impersonate_user,
            extra: record.extra.clone(),
            encrypted_extra: record.encrypted_extra.clone(),
            server_cert: record.server_cert.clone(),
        }
    }

    /// Detail patch covering exactly the four fields the fetch supplements:
    /// URI, impersonation flag, server certificate, extra JSON. Everything
    /// already present from the seed merge is left alone.
    pub fn detail_fields(record: &DatabaseRecord) -> Self {
        Self {
            sqlalchemy_uri: Some(record.sqlalchemy_uri.clone()),
            impersonate_user: record.impersonate_user,
            extra: record.extra.clone(),
            server_cert: record.server_cert.clone(),
            ..Default::default()
        }
    }

    /// Shallow-merge over `base`: present members overwrite, absent members
    /// leave the base value untouched.
    pub fn apply_to(&self, base: DraftRecord) -> DraftRecord {
        DraftRecord {
            id: self.id.or(base.id),
            database_name: self.database_name.clone().unwrap_or(base.database_name),
            sqlalchemy_uri: self.sqlalchemy_uri.clone().unwrap_or(base.sqlalchemy_uri),
            backend: self.backend.clone().or(base.backend),
            impersonate_user: self.impersonate_user.or(base.impersonate_user),
            extra: self.extra.clone().or(base.extra),
            encrypted_extra: self.encrypted_extra.clone().or(base.encrypted_extra),
            server_cert: self.server_cert.clone().or(base.server_cert),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> DatabaseRecord {
        DatabaseRecord {
            id: Some(DatabaseId::new(7)),
            database_name: "  Prod  ".to_string(),
            sqlalchemy_uri: "mysql://h/db".to_string(),
            backend: Some("mysql".to_string()),
            impersonate_user: Some(true),
            extra: Some(json!({"engine_params": {}})),
            encrypted_extra: Some(json!({"token": "s"})),
            server_cert: Some("CERT".to_string()),
        }
    }

    mod from_record {
        use super::*;

        #[test]
        fn trims_the_seeded_name() {
            let patch = RecordPatch::from_record(&full_record());
            assert_eq!(patch.database_name.as_deref(), Some("Prod"));
        }

        #[test]
        fn carries_every_present_field() {
            let patch = RecordPatch::from_record(&full_record());

            assert_eq!(patch.id, Some(DatabaseId::new(7)));
            assert_eq!(patch.sqlalchemy_uri.as_deref(), Some("mysql://h/db"));
            assert_eq!(patch.backend.as_deref(), Some("mysql"));
            assert_eq!(patch.impersonate_user, Some(true));
        }
    }

    mod detail_fields {
        use super::*;

        #[test]
        fn covers_only_the_four_detail_fields() {
            let patch = RecordPatch::detail_fields(&full_record());

            assert_eq!(patch.id, None);
            assert_eq!(patch.database_name, None);
            assert_eq!(patch.backend, None);
            assert_eq!(patch.encrypted_extra, None);

            assert_eq!(patch.sqlalchemy_uri.as_deref(), Some("mysql://h/db"));
            assert_eq!(patch.impersonate_user, Some(true));
            assert_eq!(patch.server_cert.as_deref(), Some("CERT"));
            assert!(patch.extra.is_some());
        }
    }

    mod apply_to {
        use super::*;

        #[test]
        fn present_members_overwrite_base() {
            let base = DraftRecord {
                database_name: "Old".to_string(),
                sqlalchemy_uri: "postgres://old/db".to_string(),
                ..Default::default()
            };
            let patch = RecordPatch {
                sqlalchemy_uri: Some("mysql://new/db".to_string()),
                ..Default::default()
            };

            let merged = patch.apply_to(base);

            assert_eq!(merged.database_name, "Old");
            assert_eq!(merged.sqlalchemy_uri, "mysql://new/db");
        }

        #[test]
        fn absent_members_leave_base_untouched() {
            let base = DraftRecord {
                impersonate_user: Some(false),
                server_cert: Some("KEEP".to_string()),
                ..Default::default()
            };

            let merged = RecordPatch::default().apply_to(base.clone());

            assert_eq!(merged, base);
        }
    }
}
