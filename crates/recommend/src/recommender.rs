//! The never-fail recommendation entry point.

use serde::Serialize;

use moodtune_common::config::SpotifyCredentials;
use moodtune_emotion_model::label::Emotion;

use crate::spotify::{PlaylistSummary, SpotifyClient};
use crate::themes::{search_phrase, PlaylistTheme};

/// A complete recommendation: the static theme descriptor plus whatever
/// live catalog results were available at call time (no caching, no
/// freshness guarantee).
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub emotion: Emotion,
    pub theme: PlaylistTheme,
    pub playlists: Vec<PlaylistSummary>,
}

/// Recommends playlists for a dominant emotion.
///
/// Catalog access is best-effort: if the client could not be constructed,
/// every lookup short-circuits to an empty playlist list for the rest of
/// the process; if a search fails, that one lookup degrades the same way.
pub struct PlaylistRecommender {
    client: Option<SpotifyClient>,
    search_limit: usize,
}

impl PlaylistRecommender {
    /// Build a recommender from explicit credentials.
    pub fn new(credentials: SpotifyCredentials, search_limit: usize) -> Self {
        let client = match SpotifyClient::new(credentials) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog client unavailable, search disabled");
                None
            }
        };
        Self {
            client,
            search_limit,
        }
    }

    /// Build a recommender from environment credentials; missing
    /// credentials disable search rather than failing.
    pub fn from_env(search_limit: usize) -> Self {
        match SpotifyCredentials::from_env() {
            Ok(credentials) => Self::new(credentials, search_limit),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog credentials missing, search disabled");
                Self::disabled(search_limit)
            }
        }
    }

    /// A recommender with catalog search permanently disabled.
    pub fn disabled(search_limit: usize) -> Self {
        Self {
            client: None,
            search_limit,
        }
    }

    /// Whether live catalog search is available.
    pub fn search_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Produce a recommendation for a raw label string.
    ///
    /// Total function: case-insensitive label match with neutral fallback,
    /// and any catalog failure yields the static descriptor with an empty
    /// playlist list.
    pub fn recommend(&self, raw_label: &str) -> Recommendation {
        let emotion = Emotion::parse_or_neutral(raw_label);
        self.recommend_emotion(emotion)
    }

    /// Produce a recommendation for an already-parsed emotion.
    pub fn recommend_emotion(&self, emotion: Emotion) -> Recommendation {
        let theme = PlaylistTheme::for_emotion(emotion);
        let playlists = self.search(emotion);
        Recommendation {
            emotion,
            theme,
            playlists,
        }
    }

    fn search(&self, emotion: Emotion) -> Vec<PlaylistSummary> {
        let Some(client) = &self.client else {
            tracing::debug!("Catalog client not initialized, returning empty list");
            return vec![];
        };

        let query = search_phrase(emotion);
        match client.search_playlists(query, self.search_limit) {
            Ok(playlists) => {
                tracing::debug!(%emotion, results = playlists.len(), "Catalog search complete");
                playlists
            }
            Err(e) => {
                tracing::warn!(%emotion, error = %e, "Catalog search failed, degrading to empty list");
                vec![]
            }
        }
    }
}
