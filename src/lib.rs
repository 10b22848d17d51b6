//! shortscript - writes short-video scripts, search terms and upload metadata
//! with a choice of LLM providers.
//!
//! # Overview
//!
//! A model selector tag (`gpt4`, `gemmini`, `groq-<model>`, ...) picks one of
//! five provider families. [`generate_script`] turns a subject into clean
//! narration text, [`get_search_terms`] asks for stock-footage search terms,
//! and [`generate_metadata`] produces a title, description and keywords.

pub mod config;
pub mod error;
pub mod llm;
pub mod metadata;
pub mod script;

// Re-export commonly used types
pub use config::LlmConfig;
pub use error::{GenerationError, LlmError, ProviderError};
pub use llm::{ChatBackend, LlmRouter, ModelSelector, ProviderFamily};
pub use metadata::{VideoMetadata, generate_metadata, get_search_terms};
pub use script::{CleanupMode, ScriptRequest, generate_script};
