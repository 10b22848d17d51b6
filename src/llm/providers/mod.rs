//! HTTP backends, one per wire format.

pub mod gemini;
pub mod openai_compat;

pub use gemini::GeminiBackend;
pub use openai_compat::OpenAiCompatibleBackend;
