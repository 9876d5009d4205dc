//! Transcription module for longhand
//!
//! Handles speech-to-text using whisper-rs.

mod chunk;
mod pipeline;
mod transcriber;
mod whisper;

pub use chunk::{transcribe_chunk, ChunkError, ScratchDir};
pub use pipeline::TranscriptionPipeline;
pub use transcriber::{MockTranscriber, Transcriber};
pub use whisper::WhisperTranscriber;
