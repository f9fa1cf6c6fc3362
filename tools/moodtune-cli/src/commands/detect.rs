//! Run a full emotion session over a recorded capture stream.

use std::path::PathBuf;

use moodtune_common::config::AppConfig;
use moodtune_emotion_model::label::Emotion;
use moodtune_recommend::PlaylistRecommender;
use moodtune_session_engine::{EmotionSession, FrameObserver, ReplayFeed, SessionConfig};

/// Prints each live label as it is produced, like a viewfinder overlay.
struct ConsoleOverlay;

impl FrameObserver for ConsoleOverlay {
    fn on_frame(&mut self, frame_index: u64, label: Emotion) {
        println!("  frame {frame_index}: {label}");
    }
}

pub fn run(
    config: &AppConfig,
    capture: PathBuf,
    duration: Option<f64>,
    no_search: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let classifier = super::load_classifier(config)?;

    let duration = duration.unwrap_or(config.session.duration_secs);
    let limit = limit.unwrap_or(config.session.search_limit);

    let mut feed = ReplayFeed::open(&capture)?;
    println!(
        "Running emotion session over {} ({:.1}s budget)...",
        capture.display(),
        duration
    );

    let mut session = EmotionSession::new(SessionConfig::with_budget_secs(duration)?);
    let outcome = session.run(&mut feed, &classifier, &mut ConsoleOverlay)?;

    println!();
    if outcome.frames_classified == 0 {
        println!("No emotion detected, defaulting to {}.", outcome.dominant);
    } else {
        println!(
            "Dominant emotion: {} ({} of {} frames classified)",
            outcome.dominant, outcome.frames_classified, outcome.frames_seen
        );
    }
    println!();

    let recommender = if no_search {
        PlaylistRecommender::disabled(limit)
    } else {
        PlaylistRecommender::from_env(limit)
    };
    let recommendation = recommender.recommend_emotion(outcome.dominant);
    super::print_recommendation(&recommendation);

    Ok(())
}
