//! Provider credentials and endpoints.

use std::env;
use std::path::Path;

use tracing::{debug, warn};

use crate::llm::ProviderFamily;

pub const DEFAULT_G4F_BASE_URL: &str = "http://localhost:1337/v1";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// API keys and base URLs for every provider family.
///
/// Built explicitly by the caller and handed to
/// [`LlmRouter::from_config`](crate::llm::LlmRouter::from_config).
#[derive(Clone)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub mistral_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub g4f_base_url: String,
    pub openai_base_url: String,
    pub gemini_base_url: String,
    pub mistral_base_url: String,
    pub groq_base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            google_api_key: None,
            mistral_api_key: None,
            groq_api_key: None,
            g4f_base_url: DEFAULT_G4F_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            mistral_base_url: DEFAULT_MISTRAL_BASE_URL.to_string(),
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
        }
    }
}

// Keys stay out of debug output.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "***"))
            .field("mistral_api_key", &self.mistral_api_key.as_ref().map(|_| "***"))
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "***"))
            .field("g4f_base_url", &self.g4f_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("mistral_base_url", &self.mistral_base_url)
            .field("groq_base_url", &self.groq_base_url)
            .finish()
    }
}

impl LlmConfig {
    /// Read keys and base-URL overrides from the process environment.
    ///
    /// Keys: `OPENAI_API_KEY`, `GOOGLE_API_KEY`, `MISTRAL_API_KEY`,
    /// `GROQ_API_KEY`. Base URLs: `SHORTSCRIPT_<FAMILY>_BASE_URL`
    /// (e.g. `SHORTSCRIPT_G4F_BASE_URL`). Empty values count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            openai_api_key: read_key(ProviderFamily::OpenAi),
            google_api_key: read_key(ProviderFamily::Gemini),
            mistral_api_key: read_key(ProviderFamily::Mistral),
            groq_api_key: read_key(ProviderFamily::Groq),
            g4f_base_url: read_base_url(ProviderFamily::G4f, defaults.g4f_base_url),
            openai_base_url: read_base_url(ProviderFamily::OpenAi, defaults.openai_base_url),
            gemini_base_url: read_base_url(ProviderFamily::Gemini, defaults.gemini_base_url),
            mistral_base_url: read_base_url(ProviderFamily::Mistral, defaults.mistral_base_url),
            groq_base_url: read_base_url(ProviderFamily::Groq, defaults.groq_base_url),
        }
    }

    pub fn with_api_key(mut self, family: ProviderFamily, key: impl Into<String>) -> Self {
        let key = Some(key.into());
        match family {
            ProviderFamily::G4f => {}
            ProviderFamily::OpenAi => self.openai_api_key = key,
            ProviderFamily::Gemini => self.google_api_key = key,
            ProviderFamily::Mistral => self.mistral_api_key = key,
            ProviderFamily::Groq => self.groq_api_key = key,
        }
        self
    }

    pub fn with_base_url(mut self, family: ProviderFamily, url: impl Into<String>) -> Self {
        *self.base_url_mut(family) = url.into();
        self
    }

    pub fn api_key(&self, family: ProviderFamily) -> Option<&str> {
        match family {
            ProviderFamily::G4f => None,
            ProviderFamily::OpenAi => self.openai_api_key.as_deref(),
            ProviderFamily::Gemini => self.google_api_key.as_deref(),
            ProviderFamily::Mistral => self.mistral_api_key.as_deref(),
            ProviderFamily::Groq => self.groq_api_key.as_deref(),
        }
    }

    pub fn base_url(&self, family: ProviderFamily) -> &str {
        match family {
            ProviderFamily::G4f => &self.g4f_base_url,
            ProviderFamily::OpenAi => &self.openai_base_url,
            ProviderFamily::Gemini => &self.gemini_base_url,
            ProviderFamily::Mistral => &self.mistral_base_url,
            ProviderFamily::Groq => &self.groq_base_url,
        }
    }

    fn base_url_mut(&mut self, family: ProviderFamily) -> &mut String {
        match family {
            ProviderFamily::G4f => &mut self.g4f_base_url,
            ProviderFamily::OpenAi => &mut self.openai_base_url,
            ProviderFamily::Gemini => &mut self.gemini_base_url,
            ProviderFamily::Mistral => &mut self.mistral_base_url,
            ProviderFamily::Groq => &mut self.groq_base_url,
        }
    }
}

/// Load a `.env` file into the process environment.
///
/// With no path, searches the current directory and its parents. A missing
/// file is not an error; variables already set in the environment win.
/// Returns whether a file was loaded.
pub fn load_env_file(path: Option<&Path>) -> bool {
    let result = match path {
        Some(p) => dotenvy::from_path(p).map(|_| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(loaded) => {
            debug!("Loaded environment from {}", loaded.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!("Failed to load .env file: {}", e);
            false
        }
    }
}

/// Environment variable overriding a family's base URL.
pub fn base_url_env(family: ProviderFamily) -> &'static str {
    match family {
        ProviderFamily::G4f => "SHORTSCRIPT_G4F_BASE_URL",
        ProviderFamily::OpenAi => "SHORTSCRIPT_OPENAI_BASE_URL",
        ProviderFamily::Gemini => "SHORTSCRIPT_GEMINI_BASE_URL",
        ProviderFamily::Mistral => "SHORTSCRIPT_MISTRAL_BASE_URL",
        ProviderFamily::Groq => "SHORTSCRIPT_GROQ_BASE_URL",
    }
}

fn read_key(family: ProviderFamily) -> Option<String> {
    let var = family.api_key_env()?;
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Read a base-URL override, keeping the default when the value is unusable.
///
/// Logs a warning if the variable is set but is not an http(s) URL.
fn read_base_url(family: ProviderFamily, default: String) -> String {
    let var = base_url_env(family);
    match env::var(var) {
        Ok(v) if v.starts_with("http://") || v.starts_with("https://") => v,
        Ok(v) if !v.is_empty() => {
            warn!("Invalid {} value '{}', using default {}", var, v, default);
            default
        }
        _ => default,
    }
}
