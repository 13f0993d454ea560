use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::info;

/// Extracts the audio track in the format the recognizer expects:
/// mono, 16-bit PCM WAV at the target sample rate.
#[derive(Debug, Clone)]
pub struct AudioExtractor {
    pub target_sample_rate: u32,
}

impl AudioExtractor {
    pub fn new(target_sample_rate: u32) -> Self {
        Self { target_sample_rate }
    }

    /// Extract audio from the video into `output_dir`.
    ///
    /// The output lives in a scoped temp directory owned by the caller, so
    /// it is removed on every exit path.
    pub async fn extract_for_transcription(
        &self,
        video_path: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let filename = video_path
            .file_stem()
            .ok_or_else(|| anyhow!("invalid video filename"))?
            .to_string_lossy();

        let audio_path = output_dir.join(format!("{}.wav", filename));

        info!(
            "🎵 Extracting audio for transcription: {}",
            video_path.display()
        );

        let status = tokio::process::Command::new("ffmpeg")
            .args([
                "-i",
                video_path.to_str().unwrap(),
                "-vn", // No video stream
                "-acodec",
                "pcm_s16le", // 16-bit PCM
                "-ar",
                &self.target_sample_rate.to_string(),
                "-ac",
                "1", // Mono channel
                "-f",
                "wav",
                "-y", // Overwrite existing
                audio_path.to_str().unwrap(),
            ])
            .status()
            .await?;

        if !status.success() {
            return Err(anyhow!(
                "audio extraction failed for {} (exit: {})",
                video_path.display(),
                status
            ));
        }

        info!("✅ Audio extracted: {}", audio_path.display());
        Ok(audio_path)
    }
}

impl Default for AudioExtractor {
    fn default() -> Self {
        Self::new(16000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_recognizer_sample_rate() {
        let extractor = AudioExtractor::default();
        assert_eq!(extractor.target_sample_rate, 16000);
    }
}
