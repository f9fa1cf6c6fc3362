//! Logging and tracing initialization.

use std::fs::OpenOptions;
use std::sync::Arc;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins over the configured level. When `config.file` is set,
/// output goes there instead of stderr; a file that cannot be opened
/// falls back to stderr rather than aborting startup.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = config.file.as_ref().and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Arc::new(file)),
            Err(e) => {
                eprintln!("could not open log file {path:?}: {e}");
                None
            }
        }
    });

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true);

    let _ = match (config.json, log_file) {
        (true, Some(file)) => {
            tracing::subscriber::set_global_default(builder.json().with_writer(file).finish())
        }
        (true, None) => tracing::subscriber::set_global_default(builder.json().finish()),
        (false, Some(file)) => tracing::subscriber::set_global_default(
            builder.with_ansi(false).with_writer(file).finish(),
        ),
        (false, None) => tracing::subscriber::set_global_default(builder.finish()),
    };
}

/// Initialize logging with defaults. Safe to call more than once; later
/// calls leave the installed subscriber in place, so tests can call this
/// without coordinating.
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_default_logging();
        init_default_logging();
    }

    #[test]
    fn test_file_target_creates_log_file() {
        let dir = std::env::temp_dir().join("moodtune_logging_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("moodtune.log");

        init_logging(&LoggingConfig {
            level: "info".to_string(),
            json: false,
            file: Some(PathBuf::from(&path)),
        });

        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }
}
