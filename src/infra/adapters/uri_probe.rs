//! Driver-less connection tester: validates the URI shape locally instead
//! of dialing the database.

use async_trait::async_trait;

use crate::app::ports::connection_tester::{ConnectionTestError, ConnectionTester};
use crate::domain::TestConnectionPayload;

pub struct UriProbeTester;

impl UriProbeTester {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UriProbeTester {
    fn default() -> Self {
        Self::new()
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

#[async_trait]
impl ConnectionTester for UriProbeTester {
    async fn test(&self, payload: &TestConnectionPayload) -> Result<(), ConnectionTestError> {
        let uri = &payload.sqlalchemy_uri;
        let Some((scheme, rest)) = uri.split_once("://") else {
            return Err(ConnectionTestError::InvalidUri(
                "expected <dialect>://<connection>".to_string(),
            ));
        };
        if scheme.is_empty() || !scheme.chars().all(is_scheme_char) {
            return Err(ConnectionTestError::InvalidUri(format!(
                "bad dialect {:?}",
                scheme
            )));
        }
        if rest.is_empty() {
            return Err(ConnectionTestError::InvalidUri(
                "missing host part".to_string(),
            ));
        }
        Ok(())
    }
}
