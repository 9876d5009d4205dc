//! Speech-to-text abstraction
//!
//! The trait allows swapping the real Whisper backend for a mock when
//! testing pipeline behavior.

use anyhow::Result;
use std::path::Path;

/// Trait for speech-to-text transcription of audio files.
pub trait Transcriber {
    /// Transcribe the audio file at `path` to text.
    ///
    /// Returns the transcribed text, possibly empty for silence.
    fn transcribe_file(&self, path: &Path) -> Result<String>;

    /// Name of the loaded model, for logging.
    fn model_name(&self) -> &str;
}

/// Mock transcriber for testing
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    response: String,
    should_fail: bool,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self {
            response: "mock transcription".to_string(),
            should_fail: false,
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe_file(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("mock transcription failure");
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
