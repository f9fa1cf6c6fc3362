//! Acquisition and estimation seams.
//!
//! The engine never talks to a camera or an estimator library directly.
//! It consumes a [`LandmarkFeed`]: acquisition and landmark estimation
//! composed behind one trait. A live deployment wraps its camera and
//! estimator in [`EstimatorFeed`]; offline runs replay a recorded capture
//! stream through [`ReplayFeed`].

use std::path::Path;

use moodtune_common::error::MoodtuneResult;
use moodtune_emotion_model::capture::{CaptureFrame, CaptureStream};
use moodtune_emotion_model::landmark::LandmarkSet;

/// A raw image frame in a fixed RGB8 layout.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Zero-based frame index within the stream.
    pub index: u64,

    /// Milliseconds since acquisition start.
    pub timestamp_ms: u64,

    pub width: u32,
    pub height: u32,

    /// Packed RGB8 pixel data, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

/// An abstract "next frame" provider.
///
/// `Ok(None)` signals end of stream. The source holds a scoped device
/// handle and must be released exactly once when the session is done
/// with it, on every exit path.
pub trait FrameSource {
    fn next_frame(&mut self) -> MoodtuneResult<Option<Frame>>;

    /// Release the underlying device.
    fn release(&mut self);
}

/// The external landmark estimation capability, consumed as a function
/// from frame to point collections.
pub trait LandmarkEstimator {
    fn estimate(&mut self, frame: &Frame) -> MoodtuneResult<LandmarkSet>;
}

/// Acquisition and estimation composed: yields per-frame landmark sets
/// until the underlying source is exhausted.
pub trait LandmarkFeed {
    fn next_frame(&mut self) -> MoodtuneResult<Option<CaptureFrame>>;

    /// Release the underlying acquisition resource.
    fn release(&mut self);
}

/// Composes a [`FrameSource`] and a [`LandmarkEstimator`] into a feed —
/// the live-camera path.
pub struct EstimatorFeed<S: FrameSource, E: LandmarkEstimator> {
    source: S,
    estimator: E,
}

impl<S: FrameSource, E: LandmarkEstimator> EstimatorFeed<S, E> {
    pub fn new(source: S, estimator: E) -> Self {
        Self { source, estimator }
    }
}

impl<S: FrameSource, E: LandmarkEstimator> LandmarkFeed for EstimatorFeed<S, E> {
    fn next_frame(&mut self) -> MoodtuneResult<Option<CaptureFrame>> {
        let Some(frame) = self.source.next_frame()? else {
            return Ok(None);
        };
        let landmarks = self.estimator.estimate(&frame)?;
        Ok(Some(CaptureFrame {
            index: frame.index,
            timestamp_ms: frame.timestamp_ms,
            landmarks,
        }))
    }

    fn release(&mut self) {
        self.source.release();
    }
}

/// Replays a recorded capture stream — the offline acquisition path.
pub struct ReplayFeed {
    frames: std::vec::IntoIter<CaptureFrame>,
    source: String,
}

impl ReplayFeed {
    /// Build a feed from a loaded capture stream.
    pub fn new(stream: CaptureStream) -> Self {
        Self {
            source: stream.header.source,
            frames: stream.frames.into_iter(),
        }
    }

    /// Load a capture stream from disk and wrap it in a feed.
    pub fn open(path: &Path) -> MoodtuneResult<Self> {
        Ok(Self::new(CaptureStream::read(path)?))
    }

    /// Description of the recorded acquisition source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl LandmarkFeed for ReplayFeed {
    fn next_frame(&mut self) -> MoodtuneResult<Option<CaptureFrame>> {
        Ok(self.frames.next())
    }

    fn release(&mut self) {
        tracing::debug!(source = %self.source, "Replay feed released");
    }
}
