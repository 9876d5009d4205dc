//! longhand - A lightweight CLI tool for transcribing long audio files locally with Whisper
//!
//! "longhand" because it writes out what was said, in full

pub mod audio;
pub mod cli;
pub mod config;
pub mod transcription;
