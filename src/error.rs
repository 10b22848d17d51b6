//! Error types for shortscript modules using thiserror.

use thiserror::Error;

use crate::llm::ProviderFamily;

/// Errors raised by a single provider backend.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} API key not configured. Set the {env_var} environment variable")]
    MissingApiKey {
        provider: ProviderFamily,
        env_var: &'static str,
    },

    #[error("HTTP request to {provider} failed: {source}")]
    Http {
        provider: ProviderFamily,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API returned {status}: {body}")]
    Api {
        provider: ProviderFamily,
        status: u16,
        body: String,
    },

    #[error("{provider} returned a response without usable content: {detail}")]
    MalformedResponse {
        provider: ProviderFamily,
        detail: String,
    },
}

impl ProviderError {
    pub fn provider(&self) -> ProviderFamily {
        match self {
            ProviderError::MissingApiKey { provider, .. }
            | ProviderError::Http { provider, .. }
            | ProviderError::Api { provider, .. }
            | ProviderError::MalformedResponse { provider, .. } => *provider,
        }
    }
}

/// Errors from provider routing.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The caller asked for a model the router does not know how to reach.
    #[error("Invalid AI model selected: {0}")]
    InvalidConfiguration(String),

    #[error("{provider} request failed: {source}")]
    Provider {
        provider: ProviderFamily,
        #[source]
        source: ProviderError,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl From<ProviderError> for LlmError {
    fn from(err: ProviderError) -> Self {
        LlmError::Provider {
            provider: err.provider(),
            source: err,
        }
    }
}

/// Errors from metadata generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("LLM returned an empty {field}")]
    NullResponse { field: &'static str },
}
