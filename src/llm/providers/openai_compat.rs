//! Backend for OpenAI-compatible chat-completion APIs.
//!
//! OpenAI, Mistral, Groq and the g4f aggregator all accept
//! `POST {base}/chat/completions` with the same request/response shape; they
//! differ only in base URL and whether a bearer token is required.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::llm::backend::ChatBackend;
use crate::llm::ProviderFamily;

/// OpenAI-compatible chat completion request.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat backend speaking the OpenAI chat-completions wire format.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleBackend {
    client: Client,
    provider: ProviderFamily,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleBackend {
    /// `api_key` is required for every family that declares an
    /// [`api_key_env`](ProviderFamily::api_key_env); a missing key fails the
    /// call before any request is sent.
    pub fn new(
        client: Client,
        provider: ProviderFamily,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            provider,
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn provider(&self) -> ProviderFamily {
        self.provider
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatBackend for OpenAiCompatibleBackend {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let url = self.endpoint();
        let mut builder = self.client.post(&url).json(&request);

        match (self.provider.api_key_env(), &self.api_key) {
            (_, Some(key)) => builder = builder.bearer_auth(key),
            (Some(env_var), None) => {
                return Err(ProviderError::MissingApiKey {
                    provider: self.provider,
                    env_var,
                });
            }
            (None, None) => {}
        }

        debug!("Calling {} at {} with model {}", self.provider, url, model);

        let response = builder.send().await.map_err(|source| ProviderError::Http {
            provider: self.provider,
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: self.provider,
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| ProviderError::MalformedResponse {
                provider: self.provider,
                detail: e.to_string(),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: self.provider,
                detail: "no choices in response".to_string(),
            })
    }
}
