//! Lifecycle sub-reducer: open/show/close transitions and the two-phase
//! draft fill around the detail fetch.

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::error::ModalError;
use crate::app::modal_phase::ModalPhase;
use crate::app::modal_tab::ModalTab;
use crate::app::state::{ModalMode, ModalState};
use crate::domain::{DatabaseRecord, DraftRecord, RecordPatch};

/// Handles caller-prop events and fetch completions. Returns Some(effects)
/// if the action was handled, None otherwise.
pub fn reduce_lifecycle(state: &mut ModalState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::Open { record } => Some(open(state, record.as_deref())),
        Action::Show => Some(show(state)),
        Action::Cancel => Some(close(state)),
        Action::DetailFetched { generation, record } => {
            Some(detail_fetched(state, *generation, record))
        }
        Action::DetailFetchFailed {
            generation,
            message,
        } => Some(detail_fetch_failed(state, *generation, message)),
        _ => None,
    }
}

fn open(state: &mut ModalState, record: Option<&DatabaseRecord>) -> Vec<Effect> {
    match record {
        Some(record) => {
            // Edit mode requires a persisted identifier; reject up front
            // instead of failing silently at save time.
            if record.id.is_none() {
                return vec![Effect::NotifyError {
                    message: ModalError::EditWithoutId.to_string(),
                }];
            }
            state.mode = Some(ModalMode::Edit);
            // Seed immediately, independent of visibility, so the draft is
            // populated before the first paint.
            let base = normalized_base(state);
            state.draft = Some(RecordPatch::from_record(record).apply_to(base));
            vec![]
        }
        None => {
            state.mode = Some(ModalMode::Create);
            vec![]
        }
    }
}

fn show(state: &mut ModalState) -> Vec<Effect> {
    state.visible = true;
    state.active_tab = ModalTab::default();

    // A fetch is already outstanding for this instance; rapid re-shows
    // must not issue a duplicate.
    if state.fetch.in_flight {
        return vec![];
    }

    if state.is_edit()
        && let Some(id) = state.draft.as_ref().and_then(|draft| draft.id)
    {
        state.fetch.generation += 1;
        state.fetch.in_flight = true;
        state.fetch.issued_for = Some(id);
        state.phase = ModalPhase::Opening;
        return vec![Effect::FetchDetail {
            id,
            generation: state.fetch.generation,
        }];
    }

    state.phase = ModalPhase::Ready;
    vec![]
}

fn close(state: &mut ModalState) -> Vec<Effect> {
    if state.phase.is_closed() && !state.visible {
        return vec![];
    }
    state.visible = false;
    state.phase = ModalPhase::Closed;
    // The draft never leaks across open/close cycles of the same
    // instance; the reset runs before the caller's on_close.
    state.reset_draft();
    state.abandon_fetch();
    vec![Effect::CloseModal]
}

fn detail_fetched(state: &mut ModalState, generation: u64, record: &DatabaseRecord) -> Vec<Effect> {
    if is_stale(state, generation, record.id == state.fetch.issued_for) {
        return vec![];
    }
    state.fetch.in_flight = false;
    state.fetch.issued_for = None;

    // Second phase of the fill: only the four detail fields are merged, so
    // edits made while the fetch was outstanding survive everywhere else.
    let base = normalized_base(state);
    state.draft = Some(RecordPatch::detail_fields(record).apply_to(base));
    state.phase = ModalPhase::Ready;
    vec![]
}

fn detail_fetch_failed(state: &mut ModalState, generation: u64, message: &str) -> Vec<Effect> {
    if is_stale(state, generation, true) {
        return vec![];
    }
    state.fetch.in_flight = false;
    state.fetch.issued_for = None;
    // The draft keeps its pre-fetch contents; the user can still edit and
    // save with partial data.
    state.phase = ModalPhase::Ready;
    vec![Effect::NotifyError {
        message: format!("Failed to load connection details: {}", message),
    }]
}

fn is_stale(state: &ModalState, generation: u64, id_matches: bool) -> bool {
    generation != state.fetch.generation || !id_matches
}

fn normalized_base(state: &ModalState) -> DraftRecord {
    state
        .draft
        .as_ref()
        .map(DraftRecord::normalized)
        .unwrap_or_default()
}
