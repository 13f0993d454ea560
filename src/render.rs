use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::segments::KeepRange;

/// Suffix appended to the input's base name for the output file.
const OUTPUT_SUFFIX: &str = "_no_fillers";

/// Re-encodes the kept ranges of the source video and concatenates them
/// into one output container.
///
/// Intermediate segments and the concat manifest live in a temp directory
/// that is removed when rendering finishes, on success and on error alike.
#[derive(Debug, Clone)]
pub struct MediaRenderer {
    codec: String,
    bitrate: String,
}

impl MediaRenderer {
    pub fn new(codec: impl Into<String>, bitrate: impl Into<String>) -> Self {
        Self {
            codec: codec.into(),
            bitrate: bitrate.into(),
        }
    }

    /// Output path: `<input stem>_no_fillers.mkv` next to the input.
    pub fn output_path_for(video_path: &Path) -> PathBuf {
        let stem = video_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        video_path.with_file_name(format!("{}{}.mkv", stem, OUTPUT_SUFFIX))
    }

    /// Extract every keep range in order and concatenate the extracts.
    pub async fn render(
        &self,
        video_path: &Path,
        keeps: &[KeepRange],
        output_path: &Path,
    ) -> Result<()> {
        let work_dir = TempDir::new().context("failed to create segment work directory")?;

        info!(
            "🎬 Rendering {} segments from {}",
            keeps.len(),
            video_path.display()
        );

        let mut segment_paths = Vec::with_capacity(keeps.len());
        for (index, range) in keeps.iter().enumerate() {
            let segment_path = work_dir.path().join(format!("segment_{:03}.mkv", index));
            self.extract_segment(video_path, range, &segment_path)
                .await?;
            segment_paths.push(segment_path);
        }

        let manifest_path = work_dir.path().join("concat_list.txt");
        tokio::fs::write(&manifest_path, concat_manifest(&segment_paths)).await?;

        self.concat_segments(&manifest_path, output_path).await?;

        if !output_path.exists() {
            return Err(anyhow!(
                "ffmpeg reported success but {} was not created",
                output_path.display()
            ));
        }

        info!("✅ Edited video written to {}", output_path.display());
        Ok(())
    }

    async fn extract_segment(
        &self,
        video_path: &Path,
        range: &KeepRange,
        segment_path: &Path,
    ) -> Result<()> {
        debug!(
            "Extracting segment {:.3}-{:.3} to {}",
            range.start,
            range.end,
            segment_path.display()
        );

        let status = tokio::process::Command::new("ffmpeg")
            .args([
                "-i",
                video_path.to_str().unwrap(),
                "-ss",
                &range.start.to_string(),
                "-to",
                &range.end.to_string(),
                "-c:v",
                &self.codec,
                "-b:v",
                &self.bitrate,
                "-c:a",
                "copy",
                "-y",
                segment_path.to_str().unwrap(),
            ])
            .status()
            .await?;

        if !status.success() {
            return Err(anyhow!(
                "segment extraction failed at {:.3}-{:.3} (exit: {})",
                range.start,
                range.end,
                status
            ));
        }

        Ok(())
    }

    async fn concat_segments(&self, manifest_path: &Path, output_path: &Path) -> Result<()> {
        let status = tokio::process::Command::new("ffmpeg")
            .args([
                "-f",
                "concat",
                "-safe",
                "0",
                "-i",
                manifest_path.to_str().unwrap(),
                "-c:v",
                &self.codec,
                "-b:v",
                &self.bitrate,
                "-c:a",
                "aac",
                "-y",
                output_path.to_str().unwrap(),
            ])
            .status()
            .await?;

        if !status.success() {
            return Err(anyhow!("segment concatenation failed (exit: {})", status));
        }

        Ok(())
    }
}

/// ffmpeg concat demuxer manifest: one `file '<path>'` line per segment,
/// in keep-range order.
fn concat_manifest(segments: &[PathBuf]) -> String {
    let mut manifest = String::new();
    for segment in segments {
        manifest.push_str(&format!("file '{}'\n", segment.display()));
    }
    manifest
}
