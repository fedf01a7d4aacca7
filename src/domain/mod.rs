mod payload;
mod record;

pub use payload::{TestConnectionPayload, UpdatePayload};
pub use record::{DatabaseId, DatabaseRecord, DraftRecord, RecordPatch};
