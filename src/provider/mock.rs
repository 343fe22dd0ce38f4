//! Mock completion provider for tests.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;

/// Returns a canned response, or a forced error when constructed with
/// `failing()`. Records nothing; handler tests assert behavior through
/// HTTP responses.
pub struct MockProvider {
    response: Option<String>,
}

impl MockProvider {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    pub fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::Network("connection refused".to_string())),
        }
    }
}
