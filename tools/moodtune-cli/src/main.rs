//! MoodTune CLI — Emotion detection and playlist recommendation.
//!
//! Usage:
//!   moodtune detect <CAPTURE>      Run a session over a recorded capture
//!   moodtune classify <CAPTURE>    Per-frame labels only, no verdict
//!   moodtune recommend <EMOTION>   Recommendation lookup alone
//!   moodtune check                 Check configuration and credentials

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "moodtune",
    about = "Emotion-aware playlist recommendation from landmark captures",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the classifier artifact (overrides configuration)
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full session over a recorded capture stream
    Detect {
        /// Path to the capture stream (JSONL)
        capture: PathBuf,

        /// Session window duration in seconds
        #[arg(long)]
        duration: Option<f64>,

        /// Skip the live catalog search
        #[arg(long)]
        no_search: bool,

        /// Maximum catalog playlists to fetch
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print per-frame labels without a session verdict
    Classify {
        /// Path to the capture stream (JSONL)
        capture: PathBuf,
    },

    /// Look up the recommendation for an emotion label
    Recommend {
        /// Emotion label (case-insensitive; unknown maps to neutral)
        emotion: String,

        /// Skip the live catalog search
        #[arg(long)]
        no_search: bool,

        /// Maximum catalog playlists to fetch
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check configuration, model artifact, and credentials
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = match moodtune_common::config::AppConfig::try_load() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (moodtune_common::config::AppConfig::default(), None),
        Err(e) => (moodtune_common::config::AppConfig::default(), Some(e)),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    moodtune_common::logging::init_logging(&config.logging);
    if let Some(e) = load_error {
        tracing::warn!("Ignoring config file: {e}");
    }
    if let Some(model) = cli.model {
        config.model_path = model;
    }

    match cli.command {
        Commands::Detect {
            capture,
            duration,
            no_search,
            limit,
        } => commands::detect::run(&config, capture, duration, no_search, limit),
        Commands::Classify { capture } => commands::classify::run(&config, capture),
        Commands::Recommend {
            emotion,
            no_search,
            limit,
        } => commands::recommend::run(&config, &emotion, no_search, limit),
        Commands::Check => commands::check::run(&config),
    }
}
