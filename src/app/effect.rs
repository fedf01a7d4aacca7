//! Side effects returned by the reducer, executed by EffectRunner.

use crate::domain::{
    DatabaseId, DatabaseRecord, DraftRecord, TestConnectionPayload, UpdatePayload,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchDetail {
        id: DatabaseId,
        generation: u64,
    },
    CreateRecord {
        draft: Box<DraftRecord>,
    },
    UpdateRecord {
        id: DatabaseId,
        payload: Box<UpdatePayload>,
    },
    TestConnection {
        payload: Box<TestConnectionPayload>,
    },

    NotifyError {
        message: String,
    },
    NotifySuccess {
        message: String,
    },

    /// Invokes the caller's `on_saved`; always emitted before CloseModal
    /// on a successful create or update.
    NotifySaved {
        record: Option<Box<DatabaseRecord>>,
    },
    /// Invokes the caller's `on_close`.
    CloseModal,
}

impl Effect {
    /// Effects that suspend at an external call. These run on spawned
    /// tasks so the event loop stays responsive while they are
    /// outstanding; their completions re-enter as actions.
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            Effect::FetchDetail { .. }
                | Effect::CreateRecord { .. }
                | Effect::UpdateRecord { .. }
                | Effect::TestConnection { .. }
        )
    }
}
