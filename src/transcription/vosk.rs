use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use hound::WavReader;
use tracing::{debug, info};
use vosk::{Model, Recognizer};

use super::{Transcriber, Word};

/// Samples fed to the recognizer per call.
const CHUNK_SIZE: usize = 4000;

/// Vosk-backed transcriber with word-level timestamps.
pub struct VoskTranscriber {
    model_path: PathBuf,
}

impl VoskTranscriber {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Recognition is CPU-bound and the Vosk types are not `Send`-friendly,
    /// so the whole pass runs on one blocking thread.
    fn recognize(model_path: &Path, audio_path: &Path) -> Result<Vec<Word>> {
        let mut reader = WavReader::open(audio_path)
            .with_context(|| format!("failed to open {}", audio_path.display()))?;

        let spec = reader.spec();
        if spec.channels != 1 {
            return Err(anyhow!(
                "expected mono audio, got {} channels",
                spec.channels
            ));
        }

        let model = Model::new(model_path.to_string_lossy()).ok_or_else(|| {
            anyhow!("failed to load Vosk model from {}", model_path.display())
        })?;
        let mut recognizer = Recognizer::new(&model, spec.sample_rate as f32)
            .ok_or_else(|| anyhow!("failed to create Vosk recognizer"))?;
        recognizer.set_words(true);

        let samples = reader
            .samples::<i16>()
            .collect::<Result<Vec<i16>, _>>()
            .context("failed to decode WAV samples")?;

        debug!(
            "Feeding {} samples at {}Hz to the recognizer",
            samples.len(),
            spec.sample_rate
        );

        for chunk in samples.chunks(CHUNK_SIZE) {
            let _ = recognizer.accept_waveform(chunk);
        }

        let result = recognizer
            .final_result()
            .single()
            .ok_or_else(|| anyhow!("Vosk returned no final result"))?;

        let words = result
            .result
            .into_iter()
            .map(|w| Word {
                start: w.start as f64,
                end: w.end as f64,
                word: w.word.to_string(),
            })
            .collect();

        Ok(words)
    }
}

#[async_trait]
impl Transcriber for VoskTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<Vec<Word>> {
        info!(
            "🎤 Transcribing {} with Vosk model {}",
            audio_path.display(),
            self.model_path.display()
        );

        let model_path = self.model_path.clone();
        let audio_path = audio_path.to_path_buf();
        let words =
            tokio::task::spawn_blocking(move || Self::recognize(&model_path, &audio_path))
                .await??;

        info!("✅ Recognized {} words", words.len());
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use tempfile::TempDir;

    fn write_wav(path: &Path, channels: u16) {
        let spec = WavSpec {
            channels,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for _ in 0..1600 * channels as usize {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_stereo_audio_is_rejected_before_model_load() {
        let dir = TempDir::new().unwrap();
        let wav_path = dir.path().join("stereo.wav");
        write_wav(&wav_path, 2);

        let err = VoskTranscriber::recognize(Path::new("missing-model"), &wav_path).unwrap_err();
        assert!(err.to_string().contains("mono"));
    }

    #[test]
    fn test_missing_audio_file_is_an_error() {
        let err = VoskTranscriber::recognize(
            Path::new("missing-model"),
            Path::new("does-not-exist.wav"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does-not-exist.wav"));
    }
}
