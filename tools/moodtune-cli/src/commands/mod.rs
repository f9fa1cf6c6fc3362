pub mod check;
pub mod classify;
pub mod detect;
pub mod recommend;

use moodtune_common::config::AppConfig;
use moodtune_common::error::MoodtuneResult;
use moodtune_processing_core::classifier::EmotionClassifier;
use moodtune_processing_core::features::FEATURE_LEN;
use moodtune_recommend::Recommendation;

/// Load the classifier and assert it matches the feature schema.
///
/// Any failure here is a fatal configuration error surfaced at startup.
pub(crate) fn load_classifier(config: &AppConfig) -> MoodtuneResult<EmotionClassifier> {
    let classifier = EmotionClassifier::load(&config.model_path)?;
    classifier.ensure_input_width(FEATURE_LEN)?;
    Ok(classifier)
}

/// Print a recommendation in the shared console format.
pub(crate) fn print_recommendation(recommendation: &Recommendation) {
    println!(
        "Recommended playlist for {}: {}",
        recommendation.emotion, recommendation.theme.name
    );
    println!("  {}", recommendation.theme.description);
    println!(
        "  Energy: {:.1}  Valence: {:.1}",
        recommendation.theme.energy, recommendation.theme.valence
    );
    println!();

    if recommendation.playlists.is_empty() {
        println!("No catalog playlists found for this emotion.");
        return;
    }

    println!("Catalog playlists:");
    for (i, playlist) in recommendation.playlists.iter().enumerate() {
        println!("  {}. {} by {}", i + 1, playlist.name, playlist.owner);
        println!("     Tracks: {}", playlist.total_tracks);
        if !playlist.external_url.is_empty() {
            println!("     URL: {}", playlist.external_url);
        }
    }
}
