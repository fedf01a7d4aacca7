//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! Completions of external calls re-enter as actions, which keeps every
//! transition testable without mocking I/O.

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{reduce_draft, reduce_lifecycle, reduce_submit};
use crate::app::state::ModalState;

pub fn reduce(state: &mut ModalState, action: Action) -> Vec<Effect> {
    if let Some(effects) = reduce_draft(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_lifecycle(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_submit(state, &action) {
        return effects;
    }

    match action {
        Action::SelectTab(tab) => {
            state.active_tab = tab;
            vec![]
        }

        // Handled by sub-reducers
        _ => vec![],
    }
}
