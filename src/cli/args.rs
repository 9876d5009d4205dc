//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ModelSize;

/// longhand - Local audio file transcription with Whisper
#[derive(Parser, Debug)]
#[command(name = "longhand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe an audio file to text
    Transcribe {
        /// Audio file to transcribe (wav, mp3, m4a, flac, ogg)
        input: PathBuf,

        /// Transcript destination (defaults to <input>_transcription.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Whisper model size (larger is slower but more accurate)
        #[arg(short, long)]
        model: Option<ModelSize>,

        /// Chunk length in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u32).range(1..))]
        chunk_length: Option<u32>,

        /// Language spoken in the audio (default: auto-detect)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
