pub mod callbacks;
pub mod connection_tester;
pub mod notifier;
pub mod resource_client;

pub use callbacks::ModalCallbacks;
pub use connection_tester::{ConnectionTestError, ConnectionTester};
pub use notifier::NotificationSink;
pub use resource_client::{ResourceClient, ResourceError};
