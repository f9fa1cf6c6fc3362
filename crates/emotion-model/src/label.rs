//! The closed emotion label vocabulary.
//!
//! The variant order of [`Emotion::ALL`] must match the classifier
//! artifact's output index order. The classifier adapter asserts this
//! against the artifact's embedded label list at load time.

use serde::{Deserialize, Serialize};

/// One of the six emotion categories the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Neutral,
    Surprise,
    Rock,
    Angry,
    Sad,
}

impl Emotion {
    /// All labels in classifier output order.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Surprise,
        Emotion::Rock,
        Emotion::Angry,
        Emotion::Sad,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
            Emotion::Surprise => "surprise",
            Emotion::Rock => "rock",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
        }
    }

    /// Map a classifier output index into the vocabulary.
    pub fn from_index(index: usize) -> Option<Emotion> {
        Self::ALL.get(index).copied()
    }

    /// Case-insensitive parse of a raw label string.
    pub fn parse(raw: &str) -> Option<Emotion> {
        let lowered = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|e| e.as_str() == lowered)
    }

    /// Parse with the defensive neutral fallback used at the
    /// recommendation boundary: unknown or empty input maps to neutral.
    pub fn parse_or_neutral(raw: &str) -> Emotion {
        Self::parse(raw).unwrap_or(Emotion::Neutral)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_matches_vocabulary_order() {
        assert_eq!(Emotion::from_index(0), Some(Emotion::Happy));
        assert_eq!(Emotion::from_index(3), Some(Emotion::Rock));
        assert_eq!(Emotion::from_index(5), Some(Emotion::Sad));
        assert_eq!(Emotion::from_index(6), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Emotion::parse("HAPPY"), Some(Emotion::Happy));
        assert_eq!(Emotion::parse("  Sad "), Some(Emotion::Sad));
        assert_eq!(Emotion::parse("unknown_tag"), None);
    }

    #[test]
    fn test_parse_or_neutral_fallback() {
        assert_eq!(Emotion::parse_or_neutral("HAPPY"), Emotion::Happy);
        assert_eq!(Emotion::parse_or_neutral("unknown_tag"), Emotion::Neutral);
        assert_eq!(Emotion::parse_or_neutral(""), Emotion::Neutral);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Emotion::Rock).unwrap();
        assert_eq!(json, "\"rock\"");
        let parsed: Emotion = serde_json::from_str("\"surprise\"").unwrap();
        assert_eq!(parsed, Emotion::Surprise);
    }
}
