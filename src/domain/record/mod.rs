mod database;
mod draft;
mod id;
mod patch;

pub use database::DatabaseRecord;
pub use draft::DraftRecord;
pub use id::DatabaseId;
pub use patch::RecordPatch;
