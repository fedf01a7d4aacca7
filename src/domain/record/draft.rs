use serde::Serialize;
use serde_json::Value;

use super::id::DatabaseId;

/// In-progress draft of a database-connection record.
///
/// `database_name` and `sqlalchemy_uri` are plain strings ("" = unset) so
/// presence checks downstream need no null-guards. Optional members stay
/// `None` until the user or a merge supplies them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DraftRecord {
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

impl DraftRecord {
    /// Base for every reducer transition: the name trimmed, everything
    /// else carried over. Repeated edits can therefore never accumulate
    /// leading/trailing whitespace in the name.
    pub fn normalized(&self) -> Self {
        Self {
            database_name: self.database_name.trim().to_string(),
            ..self.clone()
        }
    }

    /// True when the draft could be submitted: trimmed name and URI both
    /// non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.database_name.trim().is_empty() && !self.sqlalchemy_uri.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod normalized {
        use super::*;

        #[test]
        fn trims_name_whitespace() {
            let draft = DraftRecord {
                database_name: "  My DB  ".to_string(),
                ..Default::default()
            };

            assert_eq!(draft.normalized().database_name, "My DB");
        }

        #[test]
        fn keeps_other_fields_untouched() {
            let draft = DraftRecord {
                database_name: " x ".to_string(),
                sqlalchemy_uri: "postgres://h/db".to_string(),
                impersonate_user: Some(true),
                server_cert: Some("CERT".to_string()),
                ..Default::default()
            };

            let normalized = draft.normalized();

            assert_eq!(normalized.sqlalchemy_uri, "postgres://h/db");
            assert_eq!(normalized.impersonate_user, Some(true));
            assert_eq!(normalized.server_cert, Some("CERT".to_string()));
        }
    }

    mod has_required_fields {
        use super::*;

        #[rstest]
        #[case("", "", false)]
        #[case("My DB", "", false)]
        #[case("", "postgres://h/db", false)]
        #[case("   ", "postgres://h/db", false)]
        #[case("My DB", "postgres://h/db", true)]
        fn truth_table(#[case] name: &str, #[case] uri: &str, #[case] expected: bool) {
            let draft = DraftRecord {
                database_name: name.to_string(),
                sqlalchemy_uri: uri.to_string(),
                ..Default::default()
            };

            assert_eq!(draft.has_required_fields(), expected);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn create_payload_has_no_absent_options() {
            let draft = DraftRecord {
                database_name: "My DB".to_string(),
                sqlalchemy_uri: "postgresql://u:p@host/db".to_string(),
                ..Default::default()
            };

            let value = serde_json::to_value(&draft).unwrap();
            let obj = value.as_object().unwrap();

            assert_eq!(obj["database_name"], "My DB");
            assert_eq!(obj["sqlalchemy_uri"], "postgresql://u:p@host/db");
            assert!(!obj.contains_key("id"));
            assert!(!obj.contains_key("impersonate_user"));
        }
    }
}
