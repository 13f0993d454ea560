use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

use fillercut::config::{self, Config};
use fillercut::fillers::FillerLexicon;
use fillercut::pipeline::PipelineOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("fillercut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove filler words from a video using a local Vosk model. \
                The word lists fillers_normal.txt and fillers_threshold.txt \
                must exist in the install directory.")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Path to the video file to remove filler words from")
                .required(true),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("DIR")
                .help("Path to the Vosk model (overridden by vosk_model.txt)"),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_name("SECONDS")
                .help("Minimum duration or trailing pause for conditional fillers [default: 0.5]"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write the raw transcript to transcription.json")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bitrate")
                .short('b')
                .long("bitrate")
                .value_name("RATE")
                .help("Bitrate for video encoding, e.g. '5M' for 5 Mbps [default: 6M]"),
        )
        .arg(
            Arg::new("codec")
                .long("codec")
                .value_name("NAME")
                .help("Video codec for re-encoding [default: h264_nvenc]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let env_filter = if matches.get_flag("verbose") {
        "fillercut=debug,info"
    } else {
        "fillercut=info,warn"
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let video_path = PathBuf::from(matches.get_one::<String>("file").unwrap());
    if !video_path.exists() {
        error!("Input video does not exist: {}", video_path.display());
        return Err(anyhow::anyhow!("input video not found"));
    }

    let install_dir = config::install_dir()?;
    let mut config = Config::load(&install_dir).unwrap_or_else(|_| {
        info!("No configuration file found, using defaults");
        Config::default()
    });

    // CLI flags override the config file
    if let Some(bitrate) = matches.get_one::<String>("bitrate") {
        config.render.bitrate = bitrate.clone();
    }
    if let Some(codec) = matches.get_one::<String>("codec") {
        config.render.video_codec = codec.clone();
    }
    let threshold = match matches.get_one::<String>("threshold") {
        Some(value) => value.parse()?,
        None => config.transcription.threshold,
    };

    // Setup errors are checked before any expensive work starts
    let lexicon = FillerLexicon::load(&install_dir).await?;
    if lexicon.is_empty() {
        warn!("Both filler word lists are empty; the output will match the input");
    }

    let model_path = config::resolve_model(
        &install_dir,
        matches.get_one::<String>("model").map(String::as_str),
        config.transcription.model_path.as_deref(),
    )?;

    let options = PipelineOptions {
        threshold,
        dump_transcript: matches.get_flag("json"),
    };
    if options.dump_transcript {
        info!("JSON transcript will be written to transcription.json");
    }

    info!("🚀 fillercut starting...");
    info!("📁 Input video: {}", video_path.display());
    info!("🗣️  Vosk model: {}", model_path.display());
    info!(
        "🔧 Threshold: {}s, codec: {}, bitrate: {}",
        threshold, config.render.video_codec, config.render.bitrate
    );

    run_pipeline(config, lexicon, model_path, video_path, options).await
}

#[cfg(feature = "vosk")]
async fn run_pipeline(
    config: Config,
    lexicon: FillerLexicon,
    model_path: PathBuf,
    video_path: PathBuf,
    options: PipelineOptions,
) -> Result<()> {
    use fillercut::pipeline::Pipeline;
    use fillercut::transcription::VoskTranscriber;

    let pipeline = Pipeline::new(&config, lexicon, VoskTranscriber::new(model_path));

    let start_time = std::time::Instant::now();
    let report = pipeline.run(&video_path, &options).await?;
    let duration = start_time.elapsed();

    info!("🎉 Processing completed in {:.2}s", duration.as_secs_f64());
    info!(
        "✂️  Removed {} of {} recognized words ({:.2}s of audio)",
        report.fillers_cut, report.words_recognized, report.seconds_removed
    );
    info!("📦 Edited video: {}", report.output_path.display());

    Ok(())
}

#[cfg(not(feature = "vosk"))]
async fn run_pipeline(
    _config: Config,
    _lexicon: FillerLexicon,
    _model_path: PathBuf,
    _video_path: PathBuf,
    _options: PipelineOptions,
) -> Result<()> {
    anyhow::bail!(
        "this build has no speech recognition backend; rebuild with `cargo build --features vosk`"
    )
}
