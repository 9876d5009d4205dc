//! Transcription pipeline orchestration

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

use crate::audio;
use crate::audio::AudioChunk;
use crate::config::Settings;
use crate::transcription::chunk::{transcribe_chunk, ScratchDir};
use crate::transcription::{Transcriber, WhisperTranscriber};

/// Transcription pipeline for processing audio files
pub struct TranscriptionPipeline<T: Transcriber> {
    transcriber: T,
    chunk_length_ms: u32,
}

impl TranscriptionPipeline<WhisperTranscriber> {
    /// Create a pipeline backed by the configured Whisper model
    pub fn new(settings: &Settings) -> Result<Self> {
        let transcriber = WhisperTranscriber::new(settings)?;
        tracing::info!("Loaded Whisper model: {}", transcriber.model_name());

        Ok(Self {
            transcriber,
            chunk_length_ms: settings.transcription.chunk_length_ms,
        })
    }
}

impl<T: Transcriber> TranscriptionPipeline<T> {
    /// Create a pipeline with an explicit transcriber backend
    pub fn with_transcriber(transcriber: T, chunk_length_ms: u32) -> Self {
        Self {
            transcriber,
            chunk_length_ms,
        }
    }

    /// Transcribe an audio file, optionally writing the transcript to `output`.
    ///
    /// Chunk-level failures are logged and skipped; the run still produces
    /// a (partial) transcript. Decode and output-write failures are fatal.
    pub fn transcribe(&self, input: &Path, output: Option<&Path>) -> Result<String> {
        let started = Instant::now();

        tracing::info!("Loading audio file: {}", input.display());
        let buffer = audio::decode(input)?;
        tracing::info!("Audio duration: {:.2} seconds", buffer.duration_secs());

        let chunks = audio::segment(&buffer, self.chunk_length_ms)?;
        tracing::info!(
            "Processing {} chunks of {} ms...",
            chunks.len(),
            self.chunk_length_ms
        );

        let scratch = ScratchDir::create()?;
        let transcript = self.transcribe_chunks(&chunks, scratch.path());

        if let Some(path) = output {
            std::fs::write(path, &transcript)
                .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
            tracing::info!("Transcription saved to: {}", path.display());
        }

        tracing::info!(
            "Transcription completed in {:.2} seconds ({} characters)",
            started.elapsed().as_secs_f64(),
            transcript.chars().count()
        );

        Ok(transcript)
    }

    /// Run the sequential per-chunk loop and join the non-empty results.
    fn transcribe_chunks(&self, chunks: &[AudioChunk<'_>], scratch_dir: &Path) -> String {
        let total = chunks.len();
        let mut parts: Vec<String> = Vec::new();

        for chunk in chunks {
            tracing::debug!("Transcribing chunk {}/{}...", chunk.index + 1, total);

            match transcribe_chunk(&self.transcriber, chunk, scratch_dir) {
                Ok(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    tracing::info!(
                        "Chunk {}/{} completed: {}",
                        chunk.index + 1,
                        total,
                        preview(&text, 50)
                    );
                    parts.push(text);
                }
                Err(err) => {
                    tracing::warn!("Error transcribing chunk {}/{}: {}", chunk.index + 1, total, err);
                }
            }
        }

        parts.join(" ")
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
