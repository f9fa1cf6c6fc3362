//! MoodTune Session Engine
//!
//! Drives one bounded capture window end to end: acquire a frame,
//! estimate landmarks, extract features, classify, accumulate — until
//! the time budget expires or the source runs dry — then emit a single
//! dominant-emotion verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               EmotionSession                  │
//! │  ┌──────────────┐   ┌──────────────────────┐ │
//! │  │ LandmarkFeed │──▶│ extract → classify   │ │
//! │  │ (source +    │   │ (processing-core)    │ │
//! │  │  estimator)  │   └─────────┬────────────┘ │
//! │  └──────────────┘             ▼              │
//! │     session window ──▶ dominant emotion      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The acquisition and estimation seams are traits so the same loop runs
//! against a live camera/estimator pair, a recorded JSONL capture, or a
//! scripted test feed.

pub mod session;
pub mod source;

pub use session::*;
pub use source::*;
