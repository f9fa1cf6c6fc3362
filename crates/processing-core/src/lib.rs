//! MoodTune Processing Core
//!
//! Turns per-frame landmark detections into an emotion verdict:
//! - **Feature extraction:** anchor-relative offset encoding with a fixed
//!   output length
//! - **Classification:** forward pass through a pretrained dense network
//! - **Aggregation:** majority vote over the session window
//!
//! This crate is pure computation — no I/O beyond loading the model
//! artifact, no platform dependencies. All inputs are data; all outputs
//! are data.

pub mod aggregate;
pub mod classifier;
pub mod features;

pub use aggregate::dominant_emotion;
pub use classifier::{Classifier, EmotionClassifier, ModelArtifact};
pub use features::{extract_features, FEATURE_LEN};
