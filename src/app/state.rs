use crate::app::modal_phase::ModalPhase;
use crate::app::modal_tab::ModalTab;
use crate::domain::{DatabaseId, DraftRecord};

/// How the modal was opened. Derived once from record presence at `Open`
/// and never re-derived from draft contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

/// Bookkeeping for the detail fetch. Each fetch is tagged with a
/// generation and the identifier it was issued for; completions that do
/// not match both are stale and get discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub in_flight: bool,
    pub generation: u64,
    pub issued_for: Option<DatabaseId>,
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub mode: Option<ModalMode>,
    pub visible: bool,
    pub active_tab: ModalTab,
    /// `None` until the modal is used for the first time; a reset leaves
    /// `Some(empty)` so guards can key off field presence, not nullity.
    pub draft: Option<DraftRecord>,
    pub fetch: FetchState,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_edit(&self) -> bool {
        self.mode == Some(ModalMode::Edit)
    }

    /// Whether the save action is currently allowed. Recomputed on every
    /// call, never cached.
    pub fn can_save(&self) -> bool {
        self.draft
            .as_ref()
            .is_some_and(DraftRecord::has_required_fields)
    }

    /// Replaces the draft with an empty, editable one.
    pub fn reset_draft(&mut self) {
        self.draft = Some(DraftRecord::default());
    }

    /// Invalidates any outstanding fetch: whatever is still in flight will
    /// arrive with a stale generation and be discarded.
    pub fn abandon_fetch(&mut self) {
        if self.fetch.in_flight {
            self.fetch.generation += 1;
            self.fetch.in_flight = false;
            self.fetch.issued_for = None;
        }
    }
}
