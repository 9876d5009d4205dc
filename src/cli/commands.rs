//! CLI command implementations

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::{ModelSize, Settings};
use crate::transcription::TranscriptionPipeline;

/// Transcribe an audio file and write the transcript to disk
pub fn transcribe(
    settings: &Settings,
    input: &Path,
    output: Option<PathBuf>,
    model: Option<ModelSize>,
    chunk_length: Option<u32>,
    language: Option<String>,
) -> Result<()> {
    // Input is checked before the model loads
    if !input.exists() {
        anyhow::bail!("Audio file not found: {}", input.display());
    }

    let mut settings = settings.clone();
    if let Some(model) = model {
        settings.whisper.model = model;
    }
    if let Some(chunk_length) = chunk_length {
        settings.transcription.chunk_length_ms = chunk_length;
    }
    if let Some(language) = language {
        settings.whisper.language = language;
    }
    settings.ensure_dirs()?;

    let output = output.unwrap_or_else(|| default_output_path(input));

    let pipeline = TranscriptionPipeline::new(&settings)?;
    let transcript = pipeline.transcribe(input, Some(&output))?;

    println!("Transcription preview:");
    println!("{}", "-".repeat(50));
    println!("{}", preview(&transcript, 500));
    println!();
    println!("Transcription saved to: {}", output.display());

    Ok(())
}

/// Derive the transcript path from the input file name
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    input.with_file_name(format!("{}_transcription.txt", stem))
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
