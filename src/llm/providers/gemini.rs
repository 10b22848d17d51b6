//! Backend for the Gemini `generateContent` API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::llm::backend::ChatBackend;
use crate::llm::ProviderFamily;

const PROVIDER: ProviderFamily = ProviderFamily::Gemini;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Chat backend for Google's Gemini models.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiBackend {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ChatBackend for GeminiBackend {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey {
            provider: PROVIDER,
            env_var: "GOOGLE_API_KEY",
        })?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = self.endpoint(model);
        debug!("Calling {} at {}", PROVIDER, url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| ProviderError::MalformedResponse {
                provider: PROVIDER,
                detail: e.to_string(),
            })?;

        // Blocked prompts come back with no candidates at all.
        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse {
                provider: PROVIDER,
                detail: "no candidates in response".to_string(),
            }
        })?;

        Ok(candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model() {
        let backend = GeminiBackend::new(
            Client::new(),
            "https://generativelanguage.googleapis.com/v1beta",
            None,
        );
        assert_eq!(
            backend.endpoint("gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_response_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}],"role":"model"}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Hello world");
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let backend = GeminiBackend::new(Client::new(), "http://127.0.0.1:9", None);
        let result = backend.complete("gemini-pro", "hi").await;
        assert!(matches!(
            result,
            Err(ProviderError::MissingApiKey {
                provider: ProviderFamily::Gemini,
                ..
            })
        ));
    }
}
