//! MoodTune Emotion Model
//!
//! Pure data types shared across the pipeline:
//! - Landmark collections produced by the external estimator
//! - The closed emotion label vocabulary
//! - Recorded capture streams (JSONL) and their reader/writer
//!
//! This crate is data only — no I/O beyond capture stream persistence,
//! no platform dependencies.

pub mod capture;
pub mod label;
pub mod landmark;

pub use capture::*;
pub use label::*;
pub use landmark::*;
