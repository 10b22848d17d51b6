//! Prompt construction for script generation.

use super::cleanup::CleanupMode;

/// Input for script generation.
#[derive(Debug, Clone)]
pub struct ScriptRequest<'a> {
    pub subject: &'a str,
    pub word_count: u32,
    pub language: &'a str,
    /// Replaces the built-in instructions when non-empty.
    pub custom_prompt: Option<&'a str>,
    pub cleanup: CleanupMode,
}

impl<'a> ScriptRequest<'a> {
    pub fn new(subject: &'a str, word_count: u32, language: &'a str) -> Self {
        Self {
            subject,
            word_count,
            language,
            custom_prompt: None,
            cleanup: CleanupMode::default(),
        }
    }
}

/// Build the prompt for a script.
///
/// The subject and language are always appended, whichever body is used.
pub fn build_script_prompt(request: &ScriptRequest) -> String {
    let mut prompt = match request.custom_prompt {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => default_instructions(request.word_count),
    };

    prompt.push_str(&format!(
        "\n\nSubject: {}\nLanguage: {}\n\n",
        request.subject, request.language
    ));

    prompt
}

fn default_instructions(word_count: u32) -> String {
    format!(
        r#"Generate a {word_count} word script for a video, depending on the subject of the video.

The script is to be returned as a string.

Here is an example of a string:
"This is an example string."

Do not under any circumstance reference this prompt in your response.

Get straight to the point, don't start with unnecessary things like, "welcome to this video".

Obviously, the script should be related to the subject of the video.

YOU MUST NOT INCLUDE ANY TYPE OF MARKDOWN OR FORMATTING IN THE SCRIPT, NEVER USE A TITLE.
YOU MUST WRITE THE SCRIPT IN THE LANGUAGE SPECIFIED IN [LANGUAGE].
ONLY RETURN THE RAW CONTENT OF THE SCRIPT. DO NOT INCLUDE "VOICEOVER", "NARRATOR" OR SIMILAR INDICATORS OF WHAT SHOULD BE SPOKEN AT THE BEGINNING OF EACH PARAGRAPH OR LINE. YOU MUST NOT MENTION THE PROMPT, OR ANYTHING ABOUT THE SCRIPT ITSELF. ALSO, NEVER TALK ABOUT THE AMOUNT OF PARAGRAPHS OR LINES. JUST WRITE THE SCRIPT."#
    )
}
