use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::info;

/// Total duration of the container in seconds, via ffprobe.
pub async fn probe_duration(video_path: &Path) -> Result<f64> {
    let output = tokio::process::Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            video_path.to_str().unwrap(),
        ])
        .output()
        .await?;

    if !output.status.success() {
        return Err(anyhow!("ffprobe failed for {}", video_path.display()));
    }

    let json_str = String::from_utf8(output.stdout)?;
    let ffprobe_data: serde_json::Value = serde_json::from_str(&json_str)?;

    let duration: f64 = ffprobe_data["format"]["duration"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow!("no duration reported for {}", video_path.display()))?;

    info!(
        "📹 Probed video: {} ({:.1}s)",
        video_path.display(),
        duration
    );

    Ok(duration)
}
