//! Draft sub-reducer: merges single-field edits into the in-progress record.

use serde_json::Value;

use crate::app::action::{Action, FormField, InputValue};
use crate::app::effect::Effect;
use crate::app::state::ModalState;
use crate::domain::DraftRecord;

/// Handles the three edit kinds: plain text, input element, structured
/// editor. Returns Some(effects) if the action was handled, None otherwise.
pub fn reduce_draft(state: &mut ModalState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::TextChange { field, value } => {
            let mut next = normalized_base(state);
            apply_text(&mut next, *field, value.clone());
            state.draft = Some(next);
            Some(vec![])
        }
        Action::InputChange { field, value } => {
            let mut next = normalized_base(state);
            match value {
                // Checkbox controls store their checked state; a flag is
                // never stored as the string "true".
                InputValue::Checkbox(checked) => apply_flag(&mut next, *field, *checked),
                InputValue::Text(text) => apply_text(&mut next, *field, text.clone()),
            }
            state.draft = Some(next);
            Some(vec![])
        }
        Action::EditorChange { field, value } => {
            let mut next = normalized_base(state);
            apply_json(&mut next, *field, value.clone());
            state.draft = Some(next);
            Some(vec![])
        }
        _ => None,
    }
}

/// Every edit starts from the normalized current draft, so whitespace in
/// the name and an absent URI never survive past one transition. A draft
/// that was never created starts from the empty record.
fn normalized_base(state: &ModalState) -> DraftRecord {
    state
        .draft
        .as_ref()
        .map(DraftRecord::normalized)
        .unwrap_or_default()
}

fn apply_text(draft: &mut DraftRecord, field: FormField, value: String) {
    match field {
        FormField::Name => draft.database_name = value,
        FormField::Uri => draft.sqlalchemy_uri = value,
        FormField::ServerCert => draft.server_cert = Some(value),
        // Flag and JSON fields ignore plain text events.
        FormField::ImpersonateUser | FormField::Extra | FormField::EncryptedExtra => {}
    }
}

fn apply_flag(draft: &mut DraftRecord, field: FormField, checked: bool) {
    if field == FormField::ImpersonateUser {
        draft.impersonate_user = Some(checked);
    }
}

fn apply_json(draft: &mut DraftRecord, field: FormField, value: Value) {
    match field {
        FormField::Extra => draft.extra = Some(value),
        FormField::EncryptedExtra => draft.encrypted_extra = Some(value),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_change(field: FormField, value: &str) -> Action {
        Action::TextChange {
            field,
            value: value.to_string(),
        }
    }

    mod text_edits {
        use super::*;

        #[test]
        fn first_edit_creates_the_draft() {
            let mut state = ModalState::new();
            assert!(state.draft.is_none());

            let effects = reduce_draft(&mut state, &text_change(FormField::Uri, "postgres://h/db"));

            assert!(effects.unwrap().is_empty());
            let draft = state.draft.unwrap();
            assert_eq!(draft.sqlalchemy_uri, "postgres://h/db");
            assert_eq!(draft.database_name, "");
        }

        #[test]
        fn name_whitespace_does_not_survive_the_next_edit() {
            let mut state = ModalState::new();

            reduce_draft(&mut state, &text_change(FormField::Name, "  My DB  "));
            reduce_draft(&mut state, &text_change(FormField::Uri, "postgres://h/db"));

            let draft = state.draft.unwrap();
            assert_eq!(draft.database_name, "My DB");
            assert_eq!(draft.sqlalchemy_uri, "postgres://h/db");
        }

        #[test]
        fn uri_is_never_absent_after_any_edit() {
            let mut state = ModalState::new();

            reduce_draft(&mut state, &text_change(FormField::Name, "My DB"));

            assert_eq!(state.draft.unwrap().sqlalchemy_uri, "");
        }

        #[test]
        fn server_cert_text_is_stored_as_present() {
            let mut state = ModalState::new();

            reduce_draft(&mut state, &text_change(FormField::ServerCert, "CERT"));

            assert_eq!(state.draft.unwrap().server_cert.as_deref(), Some("CERT"));
        }

        #[test]
        fn text_event_for_a_flag_field_is_ignored() {
            let mut state = ModalState::new();

            reduce_draft(&mut state, &text_change(FormField::ImpersonateUser, "true"));

            assert_eq!(state.draft.unwrap().impersonate_user, None);
        }
    }

    mod input_edits {
        use super::*;

        #[test]
        fn checkbox_stores_boolean_true_never_the_string() {
            let mut state = ModalState::new();

            reduce_draft(
                &mut state,
                &Action::InputChange {
                    field: FormField::ImpersonateUser,
                    value: InputValue::Checkbox(true),
                },
            );

            assert_eq!(state.draft.unwrap().impersonate_user, Some(true));
        }

        #[test]
        fn unchecking_stores_boolean_false() {
            let mut state = ModalState::new();

            reduce_draft(
                &mut state,
                &Action::InputChange {
                    field: FormField::ImpersonateUser,
                    value: InputValue::Checkbox(false),
                },
            );

            assert_eq!(state.draft.unwrap().impersonate_user, Some(false));
        }

        #[test]
        fn text_input_behaves_like_a_text_change() {
            let mut state = ModalState::new();

            reduce_draft(
                &mut state,
                &Action::InputChange {
                    field: FormField::Name,
                    value: InputValue::Text("My DB".to_string()),
                },
            );

            assert_eq!(state.draft.unwrap().database_name, "My DB");
        }
    }

    mod editor_edits {
        use super::*;

        #[test]
        fn extra_json_is_merged() {
            let mut state = ModalState::new();

            reduce_draft(
                &mut state,
                &Action::EditorChange {
                    field: FormField::Extra,
                    value: json!({"engine_params": {"pool_size": 5}}),
                },
            );

            let draft = state.draft.unwrap();
            assert_eq!(draft.extra, Some(json!({"engine_params": {"pool_size": 5}})));
            assert_eq!(draft.encrypted_extra, None);
        }

        #[test]
        fn encrypted_extra_json_is_merged_separately() {
            let mut state = ModalState::new();

            reduce_draft(
                &mut state,
                &Action::EditorChange {
                    field: FormField::EncryptedExtra,
                    value: json!({"credentials": "s3cret"}),
                },
            );

            let draft = state.draft.unwrap();
            assert_eq!(draft.extra, None);
            assert_eq!(draft.encrypted_extra, Some(json!({"credentials": "s3cret"})));
        }
    }

    mod normalization_invariant {
        use super::*;

        #[test]
        fn repeated_edits_never_accumulate_whitespace() {
            let mut state = ModalState::new();

            for _ in 0..3 {
                reduce_draft(&mut state, &text_change(FormField::Name, " padded "));
                reduce_draft(&mut state, &text_change(FormField::Uri, "postgres://h/db"));
            }

            assert_eq!(state.draft.unwrap().database_name, "padded");
        }

        #[test]
        fn unrelated_actions_are_not_handled() {
            let mut state = ModalState::new();

            assert!(reduce_draft(&mut state, &Action::Show).is_none());
            assert!(state.draft.is_none());
        }
    }
}
