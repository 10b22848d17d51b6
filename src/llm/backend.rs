//! Chat backend abstraction.

use async_trait::async_trait;

use crate::error::ProviderError;

/// One provider family's chat-completion API.
///
/// This abstraction keeps request/response shapes out of the generators and
/// allows mocking the network in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send `prompt` as the only user message to `model` and return the
    /// assistant's text. Absent content is returned as an empty string.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
