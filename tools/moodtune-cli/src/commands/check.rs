//! Check configuration, model artifact, and catalog credentials.

use moodtune_common::config::{
    AppConfig, SpotifyCredentials, ENV_SPOTIFY_CLIENT_ID, ENV_SPOTIFY_CLIENT_SECRET,
    ENV_SPOTIFY_REDIRECT_URI,
};
use moodtune_emotion_model::label::Emotion;
use moodtune_processing_core::features::FEATURE_LEN;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("MoodTune System Check");
    println!("{}", "=".repeat(50));

    println!(
        "Session: {:.1}s window, up to {} catalog playlists",
        config.session.duration_secs, config.session.search_limit
    );
    println!(
        "Vocabulary: {} labels ({})",
        Emotion::ALL.len(),
        Emotion::ALL.map(|e| e.as_str()).join(", ")
    );
    println!("Feature schema width: {FEATURE_LEN}");
    println!();

    // Model artifact
    match super::load_classifier(config) {
        Ok(classifier) => {
            println!(
                "[OK] Model artifact: {} (input width {})",
                config.model_path.display(),
                classifier.input_width()
            );
        }
        Err(e) => {
            println!("[FAIL] Model artifact: {e}");
        }
    }

    // Catalog credentials
    match SpotifyCredentials::from_env() {
        Ok(credentials) => {
            println!("[OK] Catalog credentials present");
            println!("     Callback: {}", credentials.redirect_uri);
        }
        Err(e) => {
            println!("[WARN] Catalog search disabled: {e}");
            println!(
                "       Set {ENV_SPOTIFY_CLIENT_ID}, {ENV_SPOTIFY_CLIENT_SECRET}, and {ENV_SPOTIFY_REDIRECT_URI}."
            );
        }
    }

    Ok(())
}
