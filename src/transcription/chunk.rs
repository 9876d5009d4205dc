//! Per-chunk transcription with temporary file handling
//!
//! Each chunk is exported to its own WAV file so the model sees a plain
//! audio file, then the file is removed again. Cleanup is expressed as
//! drop guards so every exit path releases the file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::audio::{AudioChunk, SAMPLE_RATE};
use crate::transcription::Transcriber;

/// A failure confined to a single chunk. The pipeline logs these and
/// moves on to the next chunk.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("Failed to export chunk {index} to {path}: {source}")]
    Export {
        index: usize,
        path: PathBuf,
        source: hound::Error,
    },

    #[error("Inference failed on chunk {index}: {source}")]
    Inference {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// Per-run scratch directory for chunk WAV files.
///
/// The directory name embeds a UUID so successive or concurrent runs
/// never collide. Removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create() -> Result<Self> {
        let path = std::env::temp_dir().join(format!("longhand-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create scratch directory: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!(
                "Failed to remove scratch directory {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Drop guard for one chunk's temporary WAV file.
struct TempChunk {
    path: PathBuf,
}

impl TempChunk {
    fn path(&self) -> &Path {
        &self.path
    }

    /// Write the chunk samples as a 16-bit mono WAV at the guard's path.
    fn export(&self, chunk: &AudioChunk<'_>) -> Result<(), hound::Error> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(&self.path, spec)?;
        for &sample in chunk.samples {
            writer.write_sample((sample.clamp(-1.0, 1.0) * 32767.0) as i16)?;
        }
        writer.finalize()
    }
}

impl Drop for TempChunk {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to remove temporary chunk file {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

/// Transcribe a single chunk through a temporary WAV file.
///
/// The temporary file is deleted on both success and failure paths;
/// inference failures propagate to the caller after cleanup.
pub fn transcribe_chunk<T: Transcriber>(
    transcriber: &T,
    chunk: &AudioChunk<'_>,
    scratch_dir: &Path,
) -> Result<String, ChunkError> {
    let temp = TempChunk {
        path: scratch_dir.join(format!("chunk-{:05}.wav", chunk.index)),
    };

    temp.export(chunk).map_err(|source| ChunkError::Export {
        index: chunk.index,
        path: temp.path().to_path_buf(),
        source,
    })?;

    let text = transcriber
        .transcribe_file(temp.path())
        .map_err(|source| ChunkError::Inference {
            index: chunk.index,
            source,
        })?;

    Ok(text.trim().to_string())
}
