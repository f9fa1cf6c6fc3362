//! Anchor-relative feature encoding.
//!
//! Each detected point contributes its (x, y) offset from a designated
//! anchor point in the same collection: face points against face index 1,
//! hand points against hand index 8. An absent hand is replaced by zeros
//! of the same fixed width so the vector length never varies frame to
//! frame — the classifier expects a fixed input shape. An absent face
//! means the frame carries no usable signal and is skipped entirely.

use moodtune_emotion_model::landmark::{
    Landmark, LandmarkSet, FACE_ANCHOR, FACE_POINT_COUNT, HAND_ANCHOR, HAND_POINT_COUNT,
};

/// Feature width contributed by one hand collection.
pub const HAND_FEATURE_LEN: usize = HAND_POINT_COUNT * 2;

/// Total feature vector length for a schema-conformant landmark set.
pub const FEATURE_LEN: usize = FACE_POINT_COUNT * 2 + 2 * HAND_FEATURE_LEN;

/// Build the feature vector for one frame.
///
/// Returns `None` when no face was detected (or the face collection is
/// too short to contain its anchor point): such frames are skipped and
/// contribute nothing to the session window.
pub fn extract_features(set: &LandmarkSet) -> Option<Vec<f32>> {
    let face = set.face.as_deref()?;
    let face_anchor = face.get(FACE_ANCHOR)?;

    let mut features = Vec::with_capacity(face.len() * 2 + 2 * HAND_FEATURE_LEN);
    push_offsets(&mut features, face, face_anchor);
    push_hand(&mut features, set.left_hand.as_deref());
    push_hand(&mut features, set.right_hand.as_deref());

    Some(features)
}

fn push_offsets(features: &mut Vec<f32>, points: &[Landmark], anchor: &Landmark) {
    for point in points {
        features.push(point.x - anchor.x);
        features.push(point.y - anchor.y);
    }
}

/// A missing hand (or one too short to contain its anchor) is zero-filled
/// at the fixed hand width to preserve the vector length.
fn push_hand(features: &mut Vec<f32>, hand: Option<&[Landmark]>) {
    match hand.and_then(|points| points.get(HAND_ANCHOR).map(|anchor| (points, *anchor))) {
        Some((points, anchor)) => push_offsets(features, points, &anchor),
        None => features.extend(std::iter::repeat(0.0).take(HAND_FEATURE_LEN)),
    }
}
