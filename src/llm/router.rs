//! Provider selection and dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::backend::ChatBackend;
use crate::llm::providers::{GeminiBackend, OpenAiCompatibleBackend};
use crate::llm::selector::{ModelSelector, ProviderFamily};

/// Routes prompts to the backend for a selector's provider family.
///
/// Holds no per-call state; one router can serve any number of callers.
#[derive(Clone, Default)]
pub struct LlmRouter {
    backends: HashMap<ProviderFamily, Arc<dyn ChatBackend>>,
}

impl LlmRouter {
    /// Empty router. Register backends with [`LlmRouter::with_backend`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with an HTTP backend for every provider family.
    ///
    /// All backends share one connection pool.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder().build().map_err(LlmError::HttpClient)?;
        let mut router = Self::new();

        for family in ProviderFamily::ALL {
            let base_url = config.base_url(family).to_string();
            let api_key = config.api_key(family).map(str::to_string);
            router = match family {
                ProviderFamily::Gemini => {
                    router.with_backend(family, GeminiBackend::new(client.clone(), base_url, api_key))
                }
                _ => router.with_backend(
                    family,
                    OpenAiCompatibleBackend::new(client.clone(), family, base_url, api_key),
                ),
            };
        }

        Ok(router)
    }

    pub fn with_backend(mut self, family: ProviderFamily, backend: impl ChatBackend + 'static) -> Self {
        self.backends.insert(family, Arc::new(backend));
        self
    }

    pub fn has_backend(&self, family: ProviderFamily) -> bool {
        self.backends.contains_key(&family)
    }

    /// Send `prompt` to the model named by the `selector` tag.
    ///
    /// The selector is parsed before anything else, so an unknown tag fails
    /// with `LlmError::InvalidConfiguration` without touching the network.
    pub async fn dispatch(&self, prompt: &str, selector: &str) -> Result<String, LlmError> {
        let selector = ModelSelector::parse(selector)?;
        self.dispatch_to(prompt, &selector).await
    }

    /// Send `prompt` to an already parsed selector.
    pub async fn dispatch_to(&self, prompt: &str, selector: &ModelSelector) -> Result<String, LlmError> {
        let family = selector.family();
        let backend = self.backends.get(&family).ok_or_else(|| {
            LlmError::InvalidConfiguration(format!("{selector} (no {family} backend configured)"))
        })?;

        debug!(
            "Dispatching {} byte prompt to {} ({})",
            prompt.len(),
            family,
            selector.model()
        );

        let text = backend.complete(selector.model(), prompt).await?;

        debug!("{} returned {} bytes", family, text.len());
        Ok(text)
    }
}

impl fmt::Debug for LlmRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut families: Vec<_> = self.backends.keys().map(ProviderFamily::as_str).collect();
        families.sort_unstable();
        f.debug_struct("LlmRouter").field("backends", &families).finish()
    }
}
