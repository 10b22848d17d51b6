//! shortscript - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use shortscript::config::load_env_file;
use shortscript::{
    CleanupMode, LlmConfig, LlmRouter, ModelSelector, ScriptRequest, VideoMetadata,
    generate_metadata, generate_script, get_search_terms,
};

/// Write a short-video script, stock-footage search terms and upload metadata.
#[derive(Parser, Debug)]
#[command(name = "shortscript")]
#[command(about = "Write short-video scripts with a choice of LLM providers")]
#[command(version)]
struct Cli {
    /// Subject of the video
    #[arg(short, long, required_unless_present = "list_models")]
    subject: Option<String>,

    /// Model selector tag (see --list-models)
    #[arg(short, long, default_value = "g4f")]
    model: String,

    /// Language the script is written in
    #[arg(short, long, default_value = "English")]
    language: String,

    /// Target length of the script in words
    #[arg(long, default_value_t = 100)]
    word_count: u32,

    /// Replace the built-in script instructions
    #[arg(long)]
    custom_prompt: Option<String>,

    /// Number of search terms to request
    #[arg(long, default_value_t = 5)]
    search_terms: usize,

    /// Also generate a title, description and keywords
    #[arg(long)]
    metadata: bool,

    /// Remove each [..] and (..) span separately instead of line-greedy
    #[arg(long)]
    minimal_cleanup: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Path to a .env file (defaults to searching from the current directory)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// List accepted model selector tags and exit
    #[arg(long)]
    list_models: bool,
}

#[derive(Serialize)]
struct Output {
    subject: String,
    model: String,
    script: String,
    search_terms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<VideoMetadata>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    if cli.list_models {
        for tag in ModelSelector::known_tags() {
            println!("{tag}");
        }
        return Ok(());
    }

    let Some(subject) = cli.subject.clone() else {
        bail!("--subject is required");
    };

    // Step 1: Validate the selector before any network work
    let selector = ModelSelector::parse(&cli.model).with_context(|| {
        format!(
            "Unknown model '{}'. Accepted: {}",
            cli.model,
            ModelSelector::known_tags().join(", ")
        )
    })?;

    // Step 2: Credentials
    load_env_file(cli.env_file.as_deref());
    let config = LlmConfig::from_env();
    let router = LlmRouter::from_config(&config).context("Failed to set up LLM providers")?;

    // Step 3: Script
    eprintln!("Generating script with {} ({})...", selector.family(), selector.model());

    let request = ScriptRequest {
        custom_prompt: cli.custom_prompt.as_deref(),
        cleanup: cleanup_mode(&cli),
        ..ScriptRequest::new(&subject, cli.word_count, &cli.language)
    };

    let Some(script) = generate_script(&router, &request, &cli.model)
        .await
        .context("Failed to generate script")?
    else {
        eprintln!("\x1b[31m✗ The model returned an empty script\x1b[0m");
        bail!("No script generated for '{}'", subject);
    };

    // Step 4: Search terms
    let search_terms = get_search_terms(&router, &subject, cli.search_terms, &script, &cli.model)
        .await
        .context("Failed to generate search terms")?;

    if search_terms.is_empty() {
        eprintln!("\x1b[33m⚠ Could not parse any search terms from the model response\x1b[0m");
    } else {
        eprintln!(
            "\x1b[32m✓\x1b[0m Generated {} search terms: {}",
            search_terms.len(),
            search_terms.join(", ")
        );
    }

    // Step 5: Metadata (optional)
    let metadata = if cli.metadata {
        eprintln!("Generating metadata...");
        Some(
            generate_metadata(&router, &subject, &script, &cli.model)
                .await
                .context("Failed to generate metadata")?,
        )
    } else {
        None
    };

    let output = Output {
        subject,
        model: cli.model,
        script,
        search_terms,
        metadata,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_output(&output);
    }

    Ok(())
}

fn cleanup_mode(cli: &Cli) -> CleanupMode {
    if cli.minimal_cleanup {
        CleanupMode::Minimal
    } else {
        CleanupMode::Greedy
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the result as plain text sections.
fn print_output(output: &Output) {
    println!("## Script\n\n{}\n", output.script);

    println!("## Search terms\n");
    for term in &output.search_terms {
        println!("- {}", term);
    }
    println!();

    if let Some(metadata) = &output.metadata {
        println!("## Title\n\n{}\n", metadata.title);
        println!("## Description\n\n{}\n", metadata.description);
        println!("## Keywords\n\n{}", metadata.keywords.join(", "));
    }
}
