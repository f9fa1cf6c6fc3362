//! The bounded emotion session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moodtune_common::clock::{SessionClock, DEFAULT_SESSION_BUDGET};
use moodtune_common::error::{MoodtuneError, MoodtuneResult};
use moodtune_emotion_model::label::Emotion;
use moodtune_processing_core::aggregate::{dominant_emotion, label_counts};
use moodtune_processing_core::classifier::Classifier;
use moodtune_processing_core::features::extract_features;

use crate::source::LandmarkFeed;

/// Configuration for one emotion session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock time budget for the window.
    pub budget: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_SESSION_BUDGET,
        }
    }
}

impl SessionConfig {
    /// Build a config from a duration in seconds. Rejects negative,
    /// non-finite, and overflowing values.
    pub fn with_budget_secs(secs: f64) -> MoodtuneResult<Self> {
        let budget = Duration::try_from_secs_f64(secs).map_err(|_| {
            MoodtuneError::config(format!("invalid session duration: {secs} seconds"))
        })?;
        Ok(Self { budget })
    }
}

/// State of an emotion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created but not started.
    Idle,
    /// Accumulating labels.
    Running,
    /// Window closed, verdict produced.
    Closed,
}

/// Presentation seam: receives the live per-frame label so a frontend
/// can overlay it. The core does not assume console vs. interactive.
pub trait FrameObserver {
    fn on_frame(&mut self, frame_index: u64, label: Emotion);
}

/// Observer that ignores everything.
pub struct NullObserver;

impl FrameObserver for NullObserver {
    fn on_frame(&mut self, _frame_index: u64, _label: Emotion) {}
}

/// Result of a closed session window.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The majority-vote verdict (neutral for an empty window).
    pub dominant: Emotion,

    /// Frames pulled from the feed.
    pub frames_seen: u64,

    /// Frames that produced a label (face detected, classify succeeded).
    pub frames_classified: u64,

    /// Per-label counts in encounter order.
    pub counts: Vec<(Emotion, usize)>,

    /// Wall-clock duration of the window.
    pub elapsed_secs: f64,
}

/// Drives repeated frame acquisition for a bounded wall-clock duration,
/// emitting exactly one dominant label at the end.
pub struct EmotionSession {
    config: SessionConfig,
    state: SessionState,
    stop_flag: Arc<AtomicBool>,
}

impl EmotionSession {
    /// Create a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get a clone of the cooperative stop flag (e.g., for a UI "stop"
    /// control). Checked once per loop iteration; never preemptive.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Run the window to completion.
    ///
    /// The feed is released on every exit path. Acquisition failure is a
    /// termination signal, not an error: the window closes with whatever
    /// labels were collected. Per-frame classification failures skip the
    /// frame.
    pub fn run(
        &mut self,
        feed: &mut dyn LandmarkFeed,
        classifier: &dyn Classifier,
        observer: &mut dyn FrameObserver,
    ) -> MoodtuneResult<SessionOutcome> {
        if self.state != SessionState::Idle {
            return Err(MoodtuneError::acquisition("Session already run"));
        }

        self.state = SessionState::Running;
        let clock = SessionClock::start();
        tracing::info!(
            budget_secs = self.config.budget.as_secs_f64(),
            epoch_wall = %clock.epoch_wall(),
            "Emotion session started"
        );

        let mut window: Vec<Emotion> = vec![];
        let mut frames_seen: u64 = 0;

        loop {
            if self.stop_flag.load(Ordering::SeqCst) {
                tracing::info!("Stop requested, closing window");
                break;
            }

            let frame = match feed.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    tracing::debug!("Feed exhausted, closing window");
                    break;
                }
                Err(e) => {
                    // Device unavailable / stream ended: terminal signal,
                    // not an error. Proceed with what was collected.
                    tracing::warn!(error = %e, "Acquisition failed, closing window");
                    break;
                }
            };

            frames_seen += 1;

            match extract_features(&frame.landmarks) {
                Some(features) => match classifier.classify(&features) {
                    Ok(label) => {
                        tracing::trace!(frame = frame.index, %label, "Frame classified");
                        window.push(label);
                        observer.on_frame(frame.index, label);
                    }
                    Err(e) => {
                        tracing::warn!(frame = frame.index, error = %e, "Frame skipped");
                    }
                },
                None => {
                    tracing::trace!(frame = frame.index, "No face detected, frame skipped");
                }
            }

            // Coarse-grained budget check: a slow frame can overshoot by
            // up to one frame's processing time.
            if clock.budget_expired(self.config.budget) {
                tracing::debug!("Time budget spent, closing window");
                break;
            }
        }

        feed.release();
        self.state = SessionState::Closed;

        let counts = label_counts(&window);
        let dominant = dominant_emotion(&window);
        let outcome = SessionOutcome {
            dominant,
            frames_seen,
            frames_classified: window.len() as u64,
            counts,
            elapsed_secs: clock.elapsed_secs(),
        };

        tracing::info!(
            dominant = %outcome.dominant,
            frames_seen = outcome.frames_seen,
            frames_classified = outcome.frames_classified,
            elapsed_secs = outcome.elapsed_secs,
            "Emotion session closed"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use moodtune_emotion_model::capture::CaptureFrame;
    use moodtune_emotion_model::landmark::{Landmark, LandmarkSet};

    /// Feed returning a fixed frame list, optionally failing partway.
    struct ScriptedFeed {
        frames: Vec<CaptureFrame>,
        fail_after: Option<usize>,
        served: usize,
        released: bool,
    }

    impl ScriptedFeed {
        fn new(frames: Vec<CaptureFrame>) -> Self {
            Self {
                frames,
                fail_after: None,
                served: 0,
                released: false,
            }
        }
    }

    impl LandmarkFeed for ScriptedFeed {
        fn next_frame(&mut self) -> MoodtuneResult<Option<CaptureFrame>> {
            if let Some(limit) = self.fail_after {
                if self.served >= limit {
                    return Err(MoodtuneError::acquisition("Device unplugged"));
                }
            }
            let frame = self.frames.get(self.served).cloned();
            self.served += 1;
            Ok(frame)
        }

        fn release(&mut self) {
            self.released = true;
        }
    }

    /// Classifier that replays a fixed label sequence.
    struct ScriptedClassifier {
        labels: Vec<Emotion>,
        cursor: RefCell<usize>,
    }

    impl ScriptedClassifier {
        fn new(labels: Vec<Emotion>) -> Self {
            Self {
                labels,
                cursor: RefCell::new(0),
            }
        }
    }

    impl Classifier for ScriptedClassifier {
        fn classify(&self, _features: &[f32]) -> MoodtuneResult<Emotion> {
            let mut cursor = self.cursor.borrow_mut();
            let label = self.labels[*cursor % self.labels.len()];
            *cursor += 1;
            Ok(label)
        }
    }

    struct RecordingObserver {
        seen: Vec<(u64, Emotion)>,
    }

    impl FrameObserver for RecordingObserver {
        fn on_frame(&mut self, frame_index: u64, label: Emotion) {
            self.seen.push((frame_index, label));
        }
    }

    fn face_frame(index: u64) -> CaptureFrame {
        CaptureFrame {
            index,
            timestamp_ms: index * 33,
            landmarks: LandmarkSet {
                face: Some(vec![Landmark::new(0.4, 0.5), Landmark::new(0.5, 0.5)]),
                ..Default::default()
            },
        }
    }

    fn faceless_frame(index: u64) -> CaptureFrame {
        CaptureFrame {
            index,
            timestamp_ms: index * 33,
            landmarks: LandmarkSet::empty(),
        }
    }

    #[test]
    fn test_majority_verdict_over_scripted_window() {
        // 10 frames: 7 rock, 3 sad.
        let mut labels = vec![Emotion::Rock; 7];
        labels.extend([Emotion::Sad; 3]);
        let classifier = ScriptedClassifier::new(labels);
        let mut feed = ScriptedFeed::new((0..10).map(face_frame).collect());
        let mut observer = RecordingObserver { seen: vec![] };

        let mut session = EmotionSession::new(SessionConfig::default());
        let outcome = session
            .run(&mut feed, &classifier, &mut observer)
            .unwrap();

        assert_eq!(outcome.dominant, Emotion::Rock);
        assert_eq!(outcome.frames_seen, 10);
        assert_eq!(outcome.frames_classified, 10);
        assert_eq!(observer.seen.len(), 10);
        assert_eq!(outcome.counts[0], (Emotion::Rock, 7));
        assert!(feed.released);
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_faceless_frames_contribute_nothing() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Happy]);
        let mut feed = ScriptedFeed::new(vec![
            face_frame(0),
            faceless_frame(1),
            faceless_frame(2),
            face_frame(3),
        ]);

        let mut session = EmotionSession::new(SessionConfig::default());
        let outcome = session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.frames_seen, 4);
        assert_eq!(outcome.frames_classified, 2);
        assert_eq!(outcome.dominant, Emotion::Happy);
    }

    #[test]
    fn test_empty_window_defaults_to_neutral() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Happy]);
        let mut feed = ScriptedFeed::new(vec![faceless_frame(0), faceless_frame(1)]);

        let mut session = EmotionSession::new(SessionConfig::default());
        let outcome = session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.dominant, Emotion::Neutral);
        assert_eq!(outcome.frames_classified, 0);
        assert!(feed.released);
    }

    #[test]
    fn test_acquisition_failure_closes_window_normally() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Angry]);
        let mut feed = ScriptedFeed::new((0..10).map(face_frame).collect());
        feed.fail_after = Some(3);

        let mut session = EmotionSession::new(SessionConfig::default());
        let outcome = session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.frames_classified, 3);
        assert_eq!(outcome.dominant, Emotion::Angry);
        assert!(feed.released);
    }

    #[test]
    fn test_zero_budget_closes_after_first_frame() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Surprise]);
        let mut feed = ScriptedFeed::new((0..100).map(face_frame).collect());

        let mut session = EmotionSession::new(SessionConfig {
            budget: Duration::ZERO,
        });
        let outcome = session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.frames_seen, 1);
        assert_eq!(outcome.dominant, Emotion::Surprise);
    }

    #[test]
    fn test_stop_flag_closes_before_any_frame() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Happy]);
        let mut feed = ScriptedFeed::new((0..10).map(face_frame).collect());

        let mut session = EmotionSession::new(SessionConfig::default());
        session.stop_flag().store(true, Ordering::SeqCst);
        let outcome = session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.frames_seen, 0);
        assert_eq!(outcome.dominant, Emotion::Neutral);
        assert!(feed.released);
    }

    #[test]
    fn test_session_cannot_run_twice() {
        let classifier = ScriptedClassifier::new(vec![Emotion::Happy]);
        let mut feed = ScriptedFeed::new(vec![face_frame(0)]);

        let mut session = EmotionSession::new(SessionConfig::default());
        session
            .run(&mut feed, &classifier, &mut NullObserver)
            .unwrap();

        let mut second = ScriptedFeed::new(vec![face_frame(0)]);
        let err = session
            .run(&mut second, &classifier, &mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, MoodtuneError::Acquisition { .. }));
    }

    #[test]
    fn test_budget_secs_rejects_negative_and_non_finite() {
        let err = SessionConfig::with_budget_secs(-1.0).unwrap_err();
        assert!(matches!(err, MoodtuneError::Config { .. }));
        assert!(SessionConfig::with_budget_secs(f64::NAN).is_err());
        assert!(SessionConfig::with_budget_secs(f64::INFINITY).is_err());
    }

    #[test]
    fn test_budget_secs_accepts_ordinary_durations() {
        let config = SessionConfig::with_budget_secs(2.5).unwrap();
        assert_eq!(config.budget, Duration::from_millis(2500));

        let config = SessionConfig::with_budget_secs(0.0).unwrap();
        assert_eq!(config.budget, Duration::ZERO);
    }
}
