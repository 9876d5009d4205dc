//! Fixed-duration audio segmentation

use anyhow::{ensure, Result};

use crate::audio::{AudioBuffer, SAMPLE_RATE};

/// A contiguous slice of decoded audio, at most `chunk_length_ms` long.
///
/// Chunks borrow from the decoded buffer and exist only for the duration
/// of one transcription call.
#[derive(Debug, Clone, Copy)]
pub struct AudioChunk<'a> {
    /// Position of this chunk in the original file
    pub index: usize,
    /// Mono 16 kHz samples
    pub samples: &'a [f32],
}

/// Partition a decoded buffer into consecutive chunks of the requested
/// length. The last chunk may be shorter.
pub fn segment(buffer: &AudioBuffer, chunk_length_ms: u32) -> Result<Vec<AudioChunk<'_>>> {
    ensure!(chunk_length_ms > 0, "Chunk length must be greater than zero");

    let chunk_samples = chunk_length_ms as usize * SAMPLE_RATE as usize / 1000;

    Ok(buffer
        .samples()
        .chunks(chunk_samples)
        .enumerate()
        .map(|(index, samples)| AudioChunk { index, samples })
        .collect())
}
