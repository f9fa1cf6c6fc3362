//! Majority-vote aggregation over the session window.

use moodtune_emotion_model::label::Emotion;

/// Per-label occurrence counts in encounter order.
pub fn label_counts(window: &[Emotion]) -> Vec<(Emotion, usize)> {
    let mut counts: Vec<(Emotion, usize)> = vec![];
    for label in window {
        match counts.iter_mut().find(|(e, _)| e == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((*label, 1)),
        }
    }
    counts
}

/// The most frequent label in the window.
///
/// Ties resolve deterministically in favor of the earliest-seen label:
/// a later label must reach a strictly greater count to displace the
/// current leader. An empty window defaults to neutral.
pub fn dominant_emotion(window: &[Emotion]) -> Emotion {
    let mut leader: Option<(Emotion, usize)> = None;
    for (label, count) in label_counts(window) {
        match leader {
            Some((_, leading)) if count <= leading => {}
            _ => leader = Some((label, count)),
        }
    }
    leader.map(|(label, _)| label).unwrap_or(Emotion::Neutral)
}
