use async_trait::async_trait;

use crate::domain::TestConnectionPayload;

#[derive(Debug, Clone)]
pub enum ConnectionTestError {
    InvalidUri(String),
    Unreachable(String),
}

impl std::fmt::Display for ConnectionTestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUri(msg) => write!(f, "Invalid connection URI: {}", msg),
            Self::Unreachable(msg) => write!(f, "Connection failed: {}", msg),
        }
    }
}

impl std::error::Error for ConnectionTestError {}

/// Probes a connection payload. The core never inspects the outcome
/// beyond routing it to the notification sink.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionTester: Send + Sync {
    async fn test(&self, payload: &TestConnectionPayload) -> Result<(), ConnectionTestError>;
}
