//! Model selector parsing.
//!
//! A selector is the short tag a caller passes to pick a model (`gpt4`,
//! `groq-llama3-70b-8192`, ...). It is parsed once into a provider family and
//! the exact model name that family's API expects.

use std::fmt;
use std::str::FromStr;

use crate::error::LlmError;

/// Supported provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderFamily {
    /// Free-tier aggregator exposing an OpenAI-compatible endpoint.
    G4f,
    OpenAi,
    Gemini,
    Mistral,
    Groq,
}

impl ProviderFamily {
    pub const ALL: [ProviderFamily; 5] = [
        ProviderFamily::G4f,
        ProviderFamily::OpenAi,
        ProviderFamily::Gemini,
        ProviderFamily::Mistral,
        ProviderFamily::Groq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFamily::G4f => "g4f",
            ProviderFamily::OpenAi => "OpenAI",
            ProviderFamily::Gemini => "Gemini",
            ProviderFamily::Mistral => "Mistral",
            ProviderFamily::Groq => "Groq",
        }
    }

    /// Environment variable holding this family's API key, if it needs one.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderFamily::G4f => None,
            ProviderFamily::OpenAi => Some("OPENAI_API_KEY"),
            ProviderFamily::Gemini => Some("GOOGLE_API_KEY"),
            ProviderFamily::Mistral => Some("MISTRAL_API_KEY"),
            ProviderFamily::Groq => Some("GROQ_API_KEY"),
        }
    }
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const G4F_TAG: &str = "g4f";
const G4F_MODEL: &str = "gpt-3.5-turbo-16k-0613";
const GPT35_TAG: &str = "gpt3.5-turbo";
const GPT35_MODEL: &str = "gpt-3.5-turbo";
const GPT4_TAG: &str = "gpt4";
const GPT4_MODEL: &str = "gpt-4-1106-preview";
const GEMINI_TAG: &str = "gemmini";
const GEMINI_MODEL: &str = "gemini-pro";
const MISTRAL_TAGS: [&str; 3] = [
    "mistral-small-latest",
    "mistral-medium-latest",
    "mistral-large-latest",
];
const GROQ_PREFIX: &str = "groq-";

/// A parsed model selector: which family to call and with which model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    family: ProviderFamily,
    model: String,
}

impl ModelSelector {
    /// Parse a selector tag.
    ///
    /// Returns `LlmError::InvalidConfiguration` for anything outside the fixed
    /// tag set. `groq-` is a prefix and must be followed by a model name.
    pub fn parse(tag: &str) -> Result<Self, LlmError> {
        let (family, model) = match tag {
            G4F_TAG => (ProviderFamily::G4f, G4F_MODEL),
            GPT35_TAG => (ProviderFamily::OpenAi, GPT35_MODEL),
            GPT4_TAG => (ProviderFamily::OpenAi, GPT4_MODEL),
            GEMINI_TAG => (ProviderFamily::Gemini, GEMINI_MODEL),
            t if MISTRAL_TAGS.contains(&t) => (ProviderFamily::Mistral, t),
            t => match t.strip_prefix(GROQ_PREFIX) {
                Some(model) if !model.is_empty() => (ProviderFamily::Groq, model),
                _ => return Err(LlmError::InvalidConfiguration(tag.to_string())),
            },
        };

        Ok(Self {
            family,
            model: model.to_string(),
        })
    }

    pub fn family(&self) -> ProviderFamily {
        self.family
    }

    /// Model name sent to the provider API.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fixed tags accepted by [`ModelSelector::parse`], for help output.
    pub fn known_tags() -> Vec<String> {
        let mut tags = vec![
            G4F_TAG.to_string(),
            GPT35_TAG.to_string(),
            GPT4_TAG.to_string(),
            GEMINI_TAG.to_string(),
        ];
        tags.extend(MISTRAL_TAGS.iter().map(|t| t.to_string()));
        tags.push(format!("{GROQ_PREFIX}<model>"));
        tags
    }
}

impl FromStr for ModelSelector {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSelector::parse(s)
    }
}

impl fmt::Display for ModelSelector {
    /// Writes the selector back as the tag it was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.family, self.model.as_str()) {
            (ProviderFamily::G4f, _) => f.write_str(G4F_TAG),
            (ProviderFamily::OpenAi, GPT4_MODEL) => f.write_str(GPT4_TAG),
            (ProviderFamily::OpenAi, _) => f.write_str(GPT35_TAG),
            (ProviderFamily::Gemini, _) => f.write_str(GEMINI_TAG),
            (ProviderFamily::Mistral, model) => f.write_str(model),
            (ProviderFamily::Groq, model) => write!(f, "{GROQ_PREFIX}{model}"),
        }
    }
}
