//! Whisper transcription using whisper-rs

use anyhow::{Context, Result};
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::{resample, SAMPLE_RATE};
use crate::config::Settings;
use crate::transcription::Transcriber;

/// Whisper-based transcriber
pub struct WhisperTranscriber {
    ctx: WhisperContext,
    model_name: String,
    language: String,
    translate: bool,
    threads: u32,
}

impl std::fmt::Debug for WhisperTranscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // WhisperContext does not implement Debug; omit it.
        f.debug_struct("WhisperTranscriber")
            .field("model_name", &self.model_name)
            .field("language", &self.language)
            .field("translate", &self.translate)
            .field("threads", &self.threads)
            .finish_non_exhaustive()
    }
}

impl WhisperTranscriber {
    /// Create a new transcriber, loading the configured model.
    ///
    /// Model load failure is fatal to the run.
    pub fn new(settings: &Settings) -> Result<Self> {
        let model_path = settings.model_path();

        if !model_path.exists() {
            anyhow::bail!(
                "Whisper model not found at {}.\n\
                 Place a ggml model file there (e.g. ggml-{}.bin from the whisper.cpp\n\
                 model collection), or point LONGHAND_MODELS_DIR at a directory that has one.",
                model_path.display(),
                settings.whisper.model
            );
        }

        let ctx = WhisperContext::new_with_params(
            model_path
                .to_str()
                .context("Invalid UTF-8 in model path")?,
            WhisperContextParameters::default(),
        )
        .context("Failed to load Whisper model")?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            ctx,
            model_name,
            language: settings.whisper.language.clone(),
            translate: settings.whisper.translate,
            threads: settings.whisper.threads,
        })
    }

    /// Run inference on mono 16 kHz samples and return the joined segment text.
    fn transcribe_samples(&self, samples: &[f32]) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(self.translate);

        // Empty language means auto-detect
        if self.language.is_empty() {
            params.set_language(None);
        } else {
            params.set_language(Some(&self.language));
        }

        if self.threads > 0 {
            params.set_n_threads(self.threads as i32);
        }

        let mut state = self
            .ctx
            .create_state()
            .context("Failed to create Whisper state")?;
        state
            .full(params, samples)
            .context("Whisper inference failed")?;

        let num_segments = state
            .full_n_segments()
            .context("Failed to get segment count")?;

        let mut text = String::new();
        for i in 0..num_segments {
            let segment = state
                .full_get_segment_text(i)
                .context("Failed to get segment text")?;

            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(segment);
        }

        Ok(text)
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe_file(&self, path: &Path) -> Result<String> {
        let samples = load_wav(path)?;
        self.transcribe_samples(&samples)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Load audio from a WAV file and convert to f32 samples at 16kHz mono
fn load_wav(path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 32768.0)
            .collect(),
        (hound::SampleFormat::Int, 32) => reader
            .into_samples::<i32>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 2147483648.0)
            .collect(),
        (hound::SampleFormat::Float, 32) => {
            reader.into_samples::<f32>().filter_map(|s| s.ok()).collect()
        }
        _ => anyhow::bail!(
            "Unsupported audio format: {:?} {}bit",
            spec.sample_format,
            spec.bits_per_sample
        ),
    };

    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    let samples = if sample_rate != SAMPLE_RATE {
        resample(&samples, sample_rate, SAMPLE_RATE)
    } else {
        samples
    };

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelSize;

    #[test]
    fn new_fails_for_missing_model() {
        let mut settings = Settings::default();
        settings.whisper.model = ModelSize::Tiny;
        settings.whisper.models_dir = std::path::PathBuf::from("/nonexistent/models");

        let err = WhisperTranscriber::new(&settings).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ggml-tiny.bin"), "unexpected error: {message}");
    }

    #[test]
    fn load_wav_fails_for_missing_file() {
        assert!(load_wav(Path::new("/nonexistent/chunk.wav")).is_err());
    }
}
