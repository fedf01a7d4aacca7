pub mod callbacks;
pub mod memory_store;
pub mod notifier;
pub mod uri_probe;

pub use callbacks::RecordingCallbacks;
pub use memory_store::InMemoryResourceStore;
pub use notifier::MemoryNotifier;
pub use uri_probe::UriProbeTester;
