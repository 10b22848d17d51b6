//! Prompt construction for search terms, titles and descriptions.

/// Build the prompt asking for `amount` stock-video search terms.
pub fn build_search_terms_prompt(subject: &str, amount: usize, script: &str) -> String {
    format!(
        r#"Generate {amount} search terms for stock videos,
depending on the subject of a video.
Subject: {subject}

The search terms are to be returned as
a JSON-Array of strings.

Each search term should consist of 1-3 words,
always add the main subject of the video.

YOU MUST ONLY RETURN THE JSON-ARRAY OF STRINGS.
YOU MUST NOT RETURN ANYTHING ELSE.
YOU MUST NOT RETURN THE SCRIPT.

The search terms must be related to the subject of the video.
Here is an example of a JSON-Array of strings:
["search term 1", "search term 2", "search term 3"]

For context, here is the full text:
{script}
"#
    )
}

pub fn build_title_prompt(subject: &str) -> String {
    format!(
        "Generate a catchy and SEO-friendly title for a YouTube shorts video about {subject}.\n"
    )
}

pub fn build_description_prompt(subject: &str, script: &str) -> String {
    format!(
        r#"Write a brief and engaging description for a YouTube shorts video about {subject}.
The video is based on the following script:
{script}
"#
    )
}
