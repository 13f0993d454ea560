use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// File in the install directory that, when present, overrides the
/// command-line model flag.
pub const MODEL_FILE: &str = "vosk_model.txt";

const CONFIG_FILE: &str = "fillercut.toml";

/// Missing-configuration errors, checked eagerly before any expensive
/// work (transcription, encoding) is attempted.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("filler word list not found: {0}. Both fillers_normal.txt and fillers_threshold.txt must exist in the install directory")]
    MissingFillerList(PathBuf),

    #[error("no Vosk model configured: pass --model or put the model path in vosk_model.txt")]
    ModelNotResolved,
}

/// Configuration for the filler removal pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Audio extraction settings
    pub audio: AudioConfig,

    /// Transcription settings
    pub transcription: TranscriptionConfig,

    /// Video rendering settings
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Target sample rate for the extracted WAV
    pub target_sample_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Vosk model directory; overridden by vosk_model.txt and --model
    pub model_path: Option<PathBuf>,

    /// Duration/gap threshold in seconds for conditional fillers
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Video codec passed to ffmpeg
    pub video_codec: String,

    /// Video bitrate, e.g. "6M"
    pub bitrate: String,
}

impl Config {
    /// Load configuration from `fillercut.toml`, searching the install
    /// directory and then the working directory.
    pub fn load(install_dir: &Path) -> Result<Self> {
        let config_paths = [install_dir.join(CONFIG_FILE), PathBuf::from(CONFIG_FILE)];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        info!("📄 Loaded configuration from: {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                }
            }
        }

        Err(anyhow!("no configuration file found"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio: AudioConfig {
                target_sample_rate: 16000, // What the Vosk models expect
            },
            transcription: TranscriptionConfig {
                model_path: None,
                threshold: 0.5,
            },
            render: RenderConfig {
                video_codec: "h264_nvenc".to_string(),
                bitrate: "6M".to_string(),
            },
        }
    }
}

/// Directory the tool is installed in. The word lists, `vosk_model.txt`
/// and `fillercut.toml` live here. `FILLERCUT_HOME` overrides the default
/// (the executable's directory).
pub fn install_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FILLERCUT_HOME") {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable has no parent directory"))
}

/// Resolve the Vosk model path.
///
/// `vosk_model.txt` in the install directory takes precedence over the
/// command-line flag, which takes precedence over the config file. With
/// none of the three, resolution is a fatal setup error.
pub fn resolve_model(
    install_dir: &Path,
    cli_model: Option<&str>,
    config_model: Option<&Path>,
) -> Result<PathBuf> {
    let model_file = install_dir.join(MODEL_FILE);

    if model_file.exists() {
        info!("📄 Vosk model path is being read from {}", MODEL_FILE);
        let content = std::fs::read_to_string(&model_file)?;
        let first_line = content.lines().next().unwrap_or("").trim();

        if !first_line.is_empty() {
            return Ok(PathBuf::from(expand_env_vars(first_line)));
        }
        warn!("{} is empty, falling back to --model", MODEL_FILE);
    }

    if let Some(path) = cli_model.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config_model {
        return Ok(path.to_path_buf());
    }

    Err(SetupError::ModelNotResolved.into())
}

/// Expand `$VAR` and `${VAR}` references against the environment.
/// Unknown variables are left untouched.
fn expand_env_vars(input: &str) -> String {
    let pattern = Regex::new(r"\$\{(?P<braced>[A-Za-z_][A-Za-z0-9_]*)\}|\$(?P<plain>[A-Za-z_][A-Za-z0-9_]*)")
        .expect("env var pattern is valid");

    pattern
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let name = caps
                .name("braced")
                .or_else(|| caps.name("plain"))
                .map(|m| m.as_str())
                .unwrap_or_default();
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
