//! Video script generation.

pub mod cleanup;
pub mod prompt;

pub use cleanup::{CleanupMode, clean_script};
pub use prompt::{ScriptRequest, build_script_prompt};

use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::LlmRouter;

/// Generate and clean a script for `request` using the model named by
/// `selector`.
///
/// Returns `Ok(None)` when the model sends back an empty response. Selector
/// and provider failures are returned as errors.
pub async fn generate_script(
    router: &LlmRouter,
    request: &ScriptRequest<'_>,
    selector: &str,
) -> Result<Option<String>, LlmError> {
    let prompt = build_script_prompt(request);
    debug!("Script prompt length: {} bytes", prompt.len());

    let response = router.dispatch(&prompt, selector).await?;

    if response.is_empty() {
        warn!("LLM returned an empty response for script on '{}'", request.subject);
        return Ok(None);
    }

    debug!("Raw script response: {}", response);
    Ok(Some(clean_script(&response, request.cleanup)))
}
