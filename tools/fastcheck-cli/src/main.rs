//! Fastcheck CLI — Command-line interface for stroke screening analysis.
//!
//! Usage:
//!   fastcheck analyze-face <FRAMES>     Score a face capture
//!   fastcheck analyze-arm <FRAMES>      Score an arm capture
//!   fastcheck analyze-speech <AUDIO>    Speech analysis (stub)
//!   fastcheck screen <FRAMES>           Run a windowed screening session
//!   fastcheck detect-stroke [OPTIONS]   Combine modality verdicts
//!   fastcheck health                    Health probe
//!   fastcheck check                     Check configuration
//!
//! Analysis reports are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "fastcheck",
    about = "Stroke screening from landmark captures",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze face symmetry from a landmark frames file
    AnalyzeFace {
        /// Path to the frames file (.jsonl)
        frames: PathBuf,

        /// Detection threshold on the mean smoothed score
        #[arg(long, default_value = "0.75")]
        threshold: f64,

        /// Smoothing strategy: windowed-median|decile-trim
        #[arg(long, default_value = "windowed-median")]
        smoothing: String,
    },

    /// Analyze arm symmetry from a landmark frames file
    AnalyzeArm {
        /// Path to the frames file (.jsonl)
        frames: PathBuf,

        /// Detection threshold on the mean smoothed score
        #[arg(long, default_value = "0.70")]
        threshold: f64,

        /// Smoothing strategy: windowed-median|decile-trim
        #[arg(long, default_value = "windowed-median")]
        smoothing: String,
    },

    /// Analyze speech from an audio file (explicit stub, always negative)
    AnalyzeSpeech {
        /// Path to the audio file (wav|mp3|ogg|flac)
        audio: PathBuf,
    },

    /// Run a windowed screening session over a frames file
    Screen {
        /// Path to the frames file (.jsonl)
        frames: PathBuf,

        /// Modality to screen: face|arm
        #[arg(long, default_value = "face")]
        modality: String,

        /// Smoothing strategy: windowed-median|decile-trim
        #[arg(long, default_value = "decile-trim")]
        smoothing: String,

        /// Detection threshold override for the selected modality
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Combine per-modality verdicts and dispatch alerts if positive
    DetectStroke {
        /// Face verdict (true|false)
        #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
        face: bool,

        /// Arm verdict (true|false)
        #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
        arm: bool,

        /// Speech verdict (true|false)
        #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
        speech: bool,

        /// Emergency contact to notify (repeatable)
        #[arg(long = "contact")]
        contacts: Vec<String>,
    },

    /// Health probe
    Health,

    /// Check configuration and environment
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    fastcheck_common::logging::init_logging(&fastcheck_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    match run(cli).await {
        Ok(()) => Ok(()),
        // Rejected input exits 2 so scripts can tell a bad request from an
        // internal failure.
        Err(err)
            if err
                .downcast_ref::<fastcheck_common::error::FastcheckError>()
                .is_some_and(|e| e.is_client_error()) =>
        {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => Err(err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::AnalyzeFace {
            frames,
            threshold,
            smoothing,
        } => commands::face::run(frames, threshold, smoothing),
        Commands::AnalyzeArm {
            frames,
            threshold,
            smoothing,
        } => commands::arm::run(frames, threshold, smoothing),
        Commands::AnalyzeSpeech { audio } => commands::speech::run(audio),
        Commands::Screen {
            frames,
            modality,
            smoothing,
            threshold,
        } => commands::screen::run(frames, modality, smoothing, threshold).await,
        Commands::DetectStroke {
            face,
            arm,
            speech,
            contacts,
        } => commands::detect::run(face, arm, speech, contacts),
        Commands::Health => commands::health::run(),
        Commands::Check => commands::check::run(),
    }
}
