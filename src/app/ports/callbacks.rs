use crate::domain::DatabaseRecord;

/// Hooks supplied by the caller that owns the modal.
///
/// `on_saved` fires once per successful create or update, always before
/// the `on_close` side effects run. `on_close` fires on every close,
/// whether cancelled or saved.
#[cfg_attr(test, mockall::automock)]
pub trait ModalCallbacks: Send + Sync {
    fn on_saved(&self, record: Option<DatabaseRecord>);

    fn on_close(&self);
}
