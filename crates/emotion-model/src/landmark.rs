//! Landmark types produced by the external face/hand estimator.
//!
//! All coordinates are normalized to `[0.0, 1.0]` relative to the frame
//! dimensions, matching the estimator's output convention.

use serde::{Deserialize, Serialize};

/// Number of points in a full face mesh.
pub const FACE_POINT_COUNT: usize = 468;

/// Number of points in a hand skeleton.
pub const HAND_POINT_COUNT: usize = 21;

/// Index of the face anchor point (offsets are computed relative to it).
pub const FACE_ANCHOR: usize = 1;

/// Index of the hand anchor point (index fingertip).
pub const HAND_ANCHOR: usize = 8;

/// A single estimated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth estimate; carried through but unused by feature encoding.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Per-frame output of the estimator: three independent point collections,
/// each of which may be absent (nothing detected in the frame).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    /// Face mesh points, ordered by the estimator's schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<Vec<Landmark>>,

    /// Left hand skeleton points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<Vec<Landmark>>,

    /// Right hand skeleton points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<Vec<Landmark>>,
}

impl LandmarkSet {
    /// An entirely empty detection result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a face was detected in this frame.
    pub fn has_face(&self) -> bool {
        self.face.is_some()
    }
}
