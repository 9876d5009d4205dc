//! longhand - Local audio file transcription with Whisper
//!
//! Entry point for the longhand CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use longhand::cli::{Cli, Commands};
use longhand::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            longhand::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Transcribe {
                    input,
                    output,
                    model,
                    chunk_length,
                    language,
                } => {
                    longhand::cli::commands::transcribe(
                        &settings,
                        &input,
                        output,
                        model,
                        chunk_length,
                        language,
                    )?;
                }
                Commands::Config(config_cmd) => {
                    longhand::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
