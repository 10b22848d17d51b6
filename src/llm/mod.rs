//! LLM provider routing and response parsing.

pub mod backend;
pub mod json;
pub mod providers;
pub mod router;
pub mod selector;

pub use backend::ChatBackend;
pub use json::{extract_string_array, parse_string_array};
pub use router::LlmRouter;
pub use selector::{ModelSelector, ProviderFamily};
