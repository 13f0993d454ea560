#[cfg(feature = "vosk")]
pub mod vosk;

#[cfg(feature = "vosk")]
pub use vosk::VoskTranscriber;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A recognized word with its position on the source timeline.
///
/// Field order matches the transcript dump objects: `{start, end, word}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Recognized text
    pub word: String,
}

/// Speech-to-text seam.
///
/// Implementations take a path to a mono, 16-bit PCM WAV at the configured
/// sample rate and return the full ordered word sequence once recognition
/// completes. No partial results are streamed back.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Vec<Word>>;
}

/// Write the raw transcript as indented JSON, one `{start, end, word}`
/// object per recognized word, in transcript order.
pub async fn write_transcript(words: &[Word], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(words)?;
    tokio::fs::write(path, json).await?;
    info!("💾 Transcript written to {}", path.display());
    Ok(())
}
