//! Submission sub-reducer: validation gate, test-connection, and the
//! create/update flows.

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::error::ModalError;
use crate::app::modal_phase::ModalPhase;
use crate::app::state::{ModalMode, ModalState};
use crate::domain::{DatabaseRecord, TestConnectionPayload, UpdatePayload};

/// Handles save/test triggers and their completions. Returns Some(effects)
/// if the action was handled, None otherwise.
pub fn reduce_submit(state: &mut ModalState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::TestConnection => Some(test_connection(state)),
        Action::Save => Some(save(state)),
        Action::CreateCompleted { .. } => Some(create_completed(state)),
        Action::UpdateCompleted { record } => Some(update_completed(state, record)),
        Action::CreateFailed { .. } | Action::UpdateFailed { .. } => {
            // The resource boundary already reported the error; the modal
            // stays open with the draft intact so the user can retry.
            if state.phase.is_submitting() {
                state.phase = ModalPhase::Ready;
            }
            Some(vec![])
        }
        _ => None,
    }
}

fn test_connection(state: &ModalState) -> Vec<Effect> {
    match state.draft.as_ref() {
        Some(draft) if !draft.sqlalchemy_uri.is_empty() => vec![Effect::TestConnection {
            payload: Box::new(TestConnectionPayload::from_draft(draft)),
        }],
        _ => vec![Effect::NotifyError {
            message: "Enter a connection URI before testing".to_string(),
        }],
    }
}

fn save(state: &mut ModalState) -> Vec<Effect> {
    if !state.visible || state.phase.is_submitting() || !state.can_save() {
        return vec![];
    }
    let mode = state.mode;
    let Some(draft) = state.draft.as_mut() else {
        return vec![];
    };

    match mode {
        Some(ModalMode::Edit) => {
            let Some(id) = draft.id else {
                return vec![Effect::NotifyError {
                    message: ModalError::EditWithoutId.to_string(),
                }];
            };
            let payload = UpdatePayload::from_draft(draft);
            state.phase = ModalPhase::Submitting;
            vec![Effect::UpdateRecord {
                id,
                payload: Box::new(payload),
            }]
        }
        Some(ModalMode::Create) => {
            // The submitted draft is captured here, after the last edit, so
            // the name gets one final trim in place.
            draft.database_name = draft.database_name.trim().to_string();
            let submitted = draft.clone();
            state.phase = ModalPhase::Submitting;
            vec![Effect::CreateRecord {
                draft: Box::new(submitted),
            }]
        }
        None => vec![],
    }
}

fn create_completed(state: &mut ModalState) -> Vec<Effect> {
    if !state.phase.is_submitting() {
        return vec![];
    }
    let mut effects = vec![
        Effect::NotifySuccess {
            message: "Database connection created".to_string(),
        },
        Effect::NotifySaved { record: None },
    ];
    effects.extend(finish_close(state));
    effects
}

fn update_completed(state: &mut ModalState, record: &DatabaseRecord) -> Vec<Effect> {
    if !state.phase.is_submitting() {
        return vec![];
    }
    let mut effects = vec![
        Effect::NotifySuccess {
            message: "Database connection updated".to_string(),
        },
        Effect::NotifySaved {
            record: Some(Box::new(record.clone())),
        },
    ];
    effects.extend(finish_close(state));
    effects
}

/// Shared tail of both success paths: reset before the caller's on_close.
fn finish_close(state: &mut ModalState) -> Vec<Effect> {
    state.visible = false;
    state.phase = ModalPhase::Closed;
    state.reset_draft();
    state.abandon_fetch();
    vec![Effect::CloseModal]
}
