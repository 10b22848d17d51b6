//! Title, description and keyword generation for a finished script.

pub mod prompt;
pub mod search_terms;

pub use prompt::{build_description_prompt, build_search_terms_prompt, build_title_prompt};
pub use search_terms::{extract_search_terms, get_search_terms};

use serde::Serialize;
use tracing::debug;

use crate::error::GenerationError;
use crate::llm::LlmRouter;

/// Number of keywords requested for video metadata.
pub const KEYWORD_COUNT: usize = 6;

/// Upload metadata for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Generate title, description and keywords, in that order.
///
/// Title and description are trimmed and otherwise left as the model wrote
/// them. An empty title or description response fails with
/// `GenerationError::NullResponse` before any further call is made.
pub async fn generate_metadata(
    router: &LlmRouter,
    subject: &str,
    script: &str,
    selector: &str,
) -> Result<VideoMetadata, GenerationError> {
    let title = router.dispatch(&build_title_prompt(subject), selector).await?;
    let title = require_text(title, "title")?;
    debug!("Generated title: {}", title);

    let description = router
        .dispatch(&build_description_prompt(subject, script), selector)
        .await?;
    let description = require_text(description, "description")?;

    let keywords = get_search_terms(router, subject, KEYWORD_COUNT, script, selector).await?;

    Ok(VideoMetadata {
        title,
        description,
        keywords,
    })
}

fn require_text(response: String, field: &'static str) -> Result<String, GenerationError> {
    if response.is_empty() {
        return Err(GenerationError::NullResponse { field });
    }
    Ok(response.trim().to_string())
}
