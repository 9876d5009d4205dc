//! Audio loading module for longhand
//!
//! Decodes input files into in-memory sample buffers (symphonia) and
//! partitions them into fixed-duration chunks for transcription.

mod decoder;
mod segmenter;

pub use decoder::{decode, AudioBuffer};
pub use segmenter::{segment, AudioChunk};

pub(crate) use decoder::resample;

/// Sample rate Whisper models expect, in Hz. All decoded audio is
/// converted to mono at this rate.
pub const SAMPLE_RATE: u32 = 16_000;
