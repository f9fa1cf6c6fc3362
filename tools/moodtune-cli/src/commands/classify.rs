//! Print per-frame labels without running a session window.

use std::path::PathBuf;

use moodtune_common::config::AppConfig;
use moodtune_processing_core::classifier::Classifier;
use moodtune_processing_core::features::extract_features;
use moodtune_session_engine::{LandmarkFeed, ReplayFeed};

pub fn run(config: &AppConfig, capture: PathBuf) -> anyhow::Result<()> {
    let classifier = super::load_classifier(config)?;
    let mut feed = ReplayFeed::open(&capture)?;

    let mut seen: u64 = 0;
    let mut labeled: u64 = 0;
    while let Some(frame) = feed.next_frame()? {
        seen += 1;
        match extract_features(&frame.landmarks) {
            Some(features) => match classifier.classify(&features) {
                Ok(label) => {
                    labeled += 1;
                    println!("frame {} ({} ms): {}", frame.index, frame.timestamp_ms, label);
                }
                Err(e) => {
                    tracing::warn!(frame = frame.index, error = %e, "Frame skipped");
                }
            },
            None => {
                println!("frame {} ({} ms): no face", frame.index, frame.timestamp_ms);
            }
        }
    }
    feed.release();

    println!();
    println!("{labeled} of {seen} frames classified.");
    Ok(())
}
