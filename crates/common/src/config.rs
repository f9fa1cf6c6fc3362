//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{MoodtuneError, MoodtuneResult};

/// Environment variable holding the Spotify application id.
pub const ENV_SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the Spotify application secret.
pub const ENV_SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
/// Environment variable holding the registered callback address.
pub const ENV_SPOTIFY_REDIRECT_URI: &str = "SPOTIFY_REDIRECT_URI";

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the pretrained classifier artifact.
    pub model_path: PathBuf,

    /// Default session settings.
    pub session: SessionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default session parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Session window duration in seconds.
    pub duration_secs: f64,

    /// Maximum number of catalog playlists fetched per recommendation.
    pub search_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "moodtune=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            session: SessionDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            search_limit: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed one is an
    /// error, left to the caller to report. The CLI reports it after the
    /// tracing subscriber is installed, so the warning is not dropped.
    pub fn try_load() -> MoodtuneResult<Option<Self>> {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            MoodtuneError::config(format!("Failed to read config at {config_path:?}: {e}"))
        })?;
        let config = serde_json::from_str(&content).map_err(|e| {
            MoodtuneError::config(format!("Failed to parse config at {config_path:?}: {e}"))
        })?;
        Ok(Some(config))
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Credentials for the external music catalog.
///
/// Sourced from the environment only; never embedded in configuration
/// files or source.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl SpotifyCredentials {
    /// Read all three credential values from the environment.
    ///
    /// Returns a configuration error naming every missing variable so the
    /// user can fix them in one pass.
    pub fn from_env() -> MoodtuneResult<Self> {
        let mut missing = vec![];
        let client_id = read_env(ENV_SPOTIFY_CLIENT_ID, &mut missing);
        let client_secret = read_env(ENV_SPOTIFY_CLIENT_SECRET, &mut missing);
        let redirect_uri = read_env(ENV_SPOTIFY_REDIRECT_URI, &mut missing);

        if !missing.is_empty() {
            return Err(MoodtuneError::config(format!(
                "Missing environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

fn read_env(name: &str, missing: &mut Vec<String>) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("moodtune").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.duration_secs, 5.0);
        assert_eq!(config.session.search_limit, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model_path, config.model_path);
        assert_eq!(parsed.session.search_limit, config.session.search_limit);
    }

    #[test]
    fn test_try_load_distinguishes_missing_from_malformed() {
        let dir = std::env::temp_dir().join("moodtune_config_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        // No file yet: not an error.
        assert!(matches!(AppConfig::try_load(), Ok(None)));

        let config_dir = dir.join("moodtune");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.json"), "{not json").unwrap();
        let err = AppConfig::try_load().unwrap_err();
        assert!(matches!(err, MoodtuneError::Config { .. }));

        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        std::fs::write(config_dir.join("config.json"), json).unwrap();
        assert!(AppConfig::try_load().unwrap().is_some());

        std::env::remove_var("XDG_CONFIG_HOME");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_credentials_name_all_variables() {
        // Use a scoped fake environment by checking the error message shape
        // only when none of the variables are set.
        if std::env::var(ENV_SPOTIFY_CLIENT_ID).is_err()
            && std::env::var(ENV_SPOTIFY_CLIENT_SECRET).is_err()
            && std::env::var(ENV_SPOTIFY_REDIRECT_URI).is_err()
        {
            let err = SpotifyCredentials::from_env().unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains(ENV_SPOTIFY_CLIENT_ID));
            assert!(msg.contains(ENV_SPOTIFY_CLIENT_SECRET));
            assert!(msg.contains(ENV_SPOTIFY_REDIRECT_URI));
        }
    }
}
