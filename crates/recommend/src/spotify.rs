//! Spotify Web API client for playlist search.
//!
//! Uses the client-credentials grant (app token, no user authorization),
//! which is sufficient for public playlist search. The token is cached
//! and refreshed shortly before expiry. All calls are blocking and
//! single-attempt; retry policy belongs to the caller (which, per the
//! degrade-gracefully contract, simply accepts an empty result).

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use moodtune_common::config::SpotifyCredentials;
use moodtune_common::error::{MoodtuneError, MoodtuneResult};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Refresh the token this long before its nominal expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// A normalized playlist search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistSummary {
    pub name: String,
    pub description: String,
    pub uri: String,
    pub external_url: String,
    pub owner: String,
    pub total_tracks: u32,
}

pub struct SpotifyClient {
    http: reqwest::blocking::Client,
    credentials: SpotifyCredentials,
    token: Mutex<Option<CachedToken>>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Deserialize)]
struct SearchResponse {
    playlists: Option<PlaylistPage>,
}

#[derive(Deserialize)]
struct PlaylistPage {
    items: Option<Vec<Option<RawPlaylist>>>,
}

#[derive(Deserialize)]
struct RawPlaylist {
    name: Option<String>,
    description: Option<String>,
    uri: Option<String>,
    external_urls: Option<ExternalUrls>,
    owner: Option<RawOwner>,
    tracks: Option<RawTracks>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct RawOwner {
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct RawTracks {
    total: Option<u32>,
}

impl SpotifyClient {
    pub fn new(credentials: SpotifyCredentials) -> MoodtuneResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| MoodtuneError::catalog(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            credentials,
            token: Mutex::new(None),
        })
    }

    /// Search the catalog for playlists matching a query.
    ///
    /// Returns at most `limit` normalized summaries. A rate-limit
    /// response yields an empty list rather than an error.
    pub fn search_playlists(&self, query: &str, limit: usize) -> MoodtuneResult<Vec<PlaylistSummary>> {
        let token = self.access_token()?;

        let response = self
            .http
            .get(SEARCH_URL)
            .bearer_auth(&token)
            .query(&[
                ("q", query),
                ("type", "playlist"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .map_err(|e| MoodtuneError::catalog(format!("Search request failed: {e}")))?;

        if !response.status().is_success() {
            if response.status().as_u16() == 429 {
                tracing::warn!(query, "Catalog rate limit hit");
                return Ok(vec![]);
            }
            return Err(MoodtuneError::catalog(format!(
                "Search failed with status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response
            .json()
            .map_err(|e| MoodtuneError::catalog(format!("Malformed search response: {e}")))?;

        Ok(extract_playlists(body, limit))
    }

    fn access_token(&self) -> MoodtuneResult<String> {
        let mut cached = self
            .token
            .lock()
            .map_err(|_| MoodtuneError::catalog("Token cache poisoned"))?;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.value.clone());
            }
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|e| MoodtuneError::catalog(format!("Token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(MoodtuneError::catalog(format!(
                "Token request failed with status {}",
                response.status()
            )));
        }

        let body: TokenResponse = response
            .json()
            .map_err(|e| MoodtuneError::catalog(format!("Malformed token response: {e}")))?;

        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        *cached = Some(CachedToken {
            value: body.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(body.access_token)
    }
}

/// Normalize the raw search payload, skipping null items and substituting
/// defensive defaults for missing fields.
fn extract_playlists(response: SearchResponse, limit: usize) -> Vec<PlaylistSummary> {
    response
        .playlists
        .and_then(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .take(limit)
        .map(normalize)
        .collect()
}

fn normalize(raw: RawPlaylist) -> PlaylistSummary {
    PlaylistSummary {
        name: raw.name.unwrap_or_else(|| "Unknown Playlist".to_string()),
        description: raw
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description available".to_string()),
        uri: raw.uri.unwrap_or_default(),
        external_url: raw
            .external_urls
            .and_then(|u| u.spotify)
            .unwrap_or_default(),
        owner: raw
            .owner
            .and_then(|o| o.display_name)
            .unwrap_or_else(|| "Unknown".to_string()),
        total_tracks: raw.tracks.and_then(|t| t.total).unwrap_or(0),
    }
}
