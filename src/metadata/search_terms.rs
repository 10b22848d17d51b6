//! Stock-video search term generation.

use tracing::{info, warn};

use crate::error::LlmError;
use crate::llm::{LlmRouter, extract_string_array, parse_string_array};

use super::prompt::build_search_terms_prompt;

/// Ask the model for `amount` search terms about `subject`, using `script`
/// as context.
///
/// Parsing never fails: a response that is not a JSON array of strings goes
/// through [`extract_search_terms`] and may come back empty. Only selector
/// and provider failures are errors.
pub async fn get_search_terms(
    router: &LlmRouter,
    subject: &str,
    amount: usize,
    script: &str,
    selector: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = build_search_terms_prompt(subject, amount, script);
    let response = router.dispatch(&prompt, selector).await?;

    let terms = extract_search_terms(&response);
    info!("Generated {} search terms: {}", terms.len(), terms.join(", "));

    Ok(terms)
}

/// Turn a raw model response into search terms.
///
/// Strict JSON first, then the first array-looking span in the text, then
/// nothing.
pub fn extract_search_terms(response: &str) -> Vec<String> {
    match parse_string_array(response) {
        Ok(terms) => terms,
        Err(e) => {
            warn!("LLM returned an unformatted response ({}). Attempting to clean...", e);
            extract_string_array(response).unwrap_or_else(|| {
                warn!("Could not parse search terms from response");
                Vec::new()
            })
        }
    }
}
