use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use tempfile::TempDir;
use tracing::info;

use crate::audio::AudioExtractor;
use crate::classify::classify;
use crate::config::Config;
use crate::fillers::FillerLexicon;
use crate::render::MediaRenderer;
use crate::segments::plan;
use crate::transcription::{write_transcript, Transcriber};
use crate::video::probe_duration;

/// Name of the optional transcript artifact, written to the working
/// directory when requested.
const TRANSCRIPT_DUMP: &str = "transcription.json";

/// Per-run options resolved from the CLI.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Duration/gap threshold in seconds for conditional fillers
    pub threshold: f64,
    /// Write the raw transcript to transcription.json
    pub dump_transcript: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    pub output_path: PathBuf,
    pub words_recognized: usize,
    pub fillers_cut: usize,
    pub seconds_removed: f64,
}

/// Sequential filler-removal pipeline.
///
/// Stages run strictly in order: probe, extract, transcribe, classify,
/// plan, render. Each stage consumes the previous stage's full output.
pub struct Pipeline<T: Transcriber> {
    lexicon: FillerLexicon,
    transcriber: T,
    extractor: AudioExtractor,
    renderer: MediaRenderer,
}

impl<T: Transcriber> Pipeline<T> {
    pub fn new(config: &Config, lexicon: FillerLexicon, transcriber: T) -> Self {
        Self {
            lexicon,
            transcriber,
            extractor: AudioExtractor::new(config.audio.target_sample_rate),
            renderer: MediaRenderer::new(&config.render.video_codec, &config.render.bitrate),
        }
    }

    /// Run the whole pipeline for one video.
    pub async fn run(&self, video_path: &Path, options: &PipelineOptions) -> Result<RemovalReport> {
        let total_duration = probe_duration(video_path).await?;

        // The extracted WAV is scoped to this run and removed on every
        // exit path, including errors.
        let audio_dir = TempDir::new()?;
        let audio_path = self
            .extractor
            .extract_for_transcription(video_path, audio_dir.path())
            .await?;

        let words = self.transcriber.transcribe(&audio_path).await?;
        if words.is_empty() {
            info!("No words recognized; the output will match the input");
        }

        if options.dump_transcript {
            write_transcript(&words, Path::new(TRANSCRIPT_DUMP)).await?;
        }

        let cuts = classify(&words, &self.lexicon, options.threshold);
        let seconds_removed: f64 = cuts.iter().map(|c| c.duration()).sum();
        info!(
            "✂️  {} filler words to cut ({:.2}s)",
            cuts.len(),
            seconds_removed
        );

        let keeps = plan(&cuts, total_duration);

        let output_path = MediaRenderer::output_path_for(video_path);
        self.renderer.render(video_path, &keeps, &output_path).await?;

        Ok(RemovalReport {
            output_path,
            words_recognized: words.len(),
            fillers_cut: cuts.len(),
            seconds_removed,
        })
    }
}
