//! Completion provider abstraction.
//!
//! The search handler talks to an external chat-completion API through the
//! `CompletionProvider` trait, so the real OpenAI client and the mock used
//! in tests are interchangeable.

pub mod mock;
pub mod openai;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Chat-completion provider. Sends a system+user message pair and returns
/// the first generated choice's text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}
