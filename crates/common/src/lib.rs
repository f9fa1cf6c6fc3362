//! MoodTune Common Utilities
//!
//! Shared infrastructure for all MoodTune crates:
//! - Error types and result aliases
//! - Session clock for the bounded capture window
//! - Tracing/logging initialization
//! - Configuration and credential loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
