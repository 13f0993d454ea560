//! fillercut - filler word removal for spoken video
//!
//! Transcribes the audio track with a local Vosk model, finds the time
//! ranges occupied by filler words, and re-encodes the video with those
//! ranges cut out via FFmpeg.

pub mod audio;
pub mod classify;
pub mod config;
pub mod fillers;
pub mod pipeline;
pub mod render;
pub mod segments;
pub mod transcription;
pub mod video;

// Re-export main types for easy access
pub use crate::classify::{classify, CutRange};
pub use crate::config::{Config, SetupError};
pub use crate::fillers::FillerLexicon;
pub use crate::pipeline::{Pipeline, PipelineOptions, RemovalReport};
pub use crate::render::MediaRenderer;
pub use crate::segments::{plan, KeepRange};
pub use crate::transcription::{Transcriber, Word};
#[cfg(feature = "vosk")]
pub use crate::transcription::VoskTranscriber;
