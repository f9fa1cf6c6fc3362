//! MoodTune Recommendation
//!
//! Maps a dominant emotion to a playlist recommendation in two steps:
//! a deterministic lookup in a fixed theme table (total, never fails),
//! then a best-effort live search against the Spotify catalog that
//! degrades to an empty result list on any failure. The caller always
//! receives a usable recommendation, even with zero connectivity.

pub mod recommender;
pub mod spotify;
pub mod themes;

pub use recommender::{PlaylistRecommender, Recommendation};
pub use spotify::{PlaylistSummary, SpotifyClient};
pub use themes::PlaylistTheme;
