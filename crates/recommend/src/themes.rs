//! The fixed emotion-to-theme table.
//!
//! Immutable reference data: one entry per vocabulary label, plus the
//! catalog search phrase used to enrich it with live results.

use serde::Serialize;

use moodtune_emotion_model::label::Emotion;

/// A curated playlist theme descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaylistTheme {
    pub name: &'static str,
    pub description: &'static str,
    /// Mood energy in [0, 1].
    pub energy: f32,
    /// Mood valence (positivity) in [0, 1].
    pub valence: f32,
}

impl PlaylistTheme {
    /// Total lookup: every vocabulary member has exactly one theme.
    pub fn for_emotion(emotion: Emotion) -> PlaylistTheme {
        match emotion {
            Emotion::Happy => PlaylistTheme {
                name: "Feel Good Vibes",
                description: "Upbeat songs to match your joyful mood",
                energy: 0.8,
                valence: 0.9,
            },
            Emotion::Neutral => PlaylistTheme {
                name: "Focus & Flow",
                description: "Balanced tracks for any activity",
                energy: 0.5,
                valence: 0.5,
            },
            Emotion::Surprise => PlaylistTheme {
                name: "Curiosity & Wonder",
                description: "Intriguing tracks for unexpected moments",
                energy: 0.7,
                valence: 0.8,
            },
            Emotion::Rock => PlaylistTheme {
                name: "Rock On!",
                description: "High-energy rock music to boost your mood",
                energy: 0.9,
                valence: 0.7,
            },
            Emotion::Angry => PlaylistTheme {
                name: "Calm Down & Relax",
                description: "Soothing tracks to ease frustration",
                energy: 0.3,
                valence: 0.4,
            },
            Emotion::Sad => PlaylistTheme {
                name: "Gentle Comfort",
                description: "Understanding songs for difficult moments",
                energy: 0.2,
                valence: 0.3,
            },
        }
    }

    /// Lookup from a raw label string: case-insensitive, unknown or empty
    /// input maps to the neutral entry.
    pub fn for_raw_label(raw: &str) -> PlaylistTheme {
        Self::for_emotion(Emotion::parse_or_neutral(raw))
    }
}

/// Catalog search phrase for an emotion.
pub fn search_phrase(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "happy upbeat feel good",
        Emotion::Neutral => "focus concentration",
        Emotion::Surprise => "eclectic surprising",
        Emotion::Rock => "classic rock hard rock",
        Emotion::Angry => "calm relaxing",
        Emotion::Sad => "sad melancholic",
    }
}
