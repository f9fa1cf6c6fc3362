//! Recorded capture streams.
//!
//! A capture stream is an append-only JSONL file: a `# {header}` comment
//! line followed by one [`CaptureFrame`] per line. Streams are produced
//! by an external estimator frontend and replayed through the session
//! pipeline, so a session can be re-run without a camera attached.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use moodtune_common::error::{MoodtuneError, MoodtuneResult};

use crate::landmark::LandmarkSet;

/// Current capture stream schema version.
pub const CAPTURE_SCHEMA_VERSION: &str = "1.0";

/// Stream metadata written as the first line of a capture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at capture start (ISO 8601).
    pub epoch_wall: String,

    /// Free-form description of the acquisition source (e.g., device name).
    pub source: String,
}

/// One recorded frame: its landmarks plus timing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureFrame {
    /// Zero-based frame index within the stream.
    #[serde(rename = "i")]
    pub index: u64,

    /// Milliseconds since capture start.
    #[serde(rename = "t")]
    pub timestamp_ms: u64,

    /// Estimator output for this frame.
    pub landmarks: LandmarkSet,
}

/// A fully loaded capture stream.
#[derive(Debug, Clone)]
pub struct CaptureStream {
    pub header: CaptureStreamHeader,
    pub frames: Vec<CaptureFrame>,
}

impl CaptureStream {
    /// Read a capture stream from a JSONL file.
    pub fn read(path: &Path) -> MoodtuneResult<Self> {
        if !path.exists() {
            return Err(MoodtuneError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let mut header: Option<CaptureStreamHeader> = None;
        let mut frames = vec![];

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(rest) = trimmed.strip_prefix('#') {
                if header.is_none() {
                    header = Some(serde_json::from_str(rest.trim())?);
                }
                continue;
            }
            frames.push(serde_json::from_str(trimmed)?);
        }

        let header = header.ok_or_else(|| {
            MoodtuneError::acquisition(format!(
                "Capture stream {} has no header line",
                path.display()
            ))
        })?;

        Ok(Self { header, frames })
    }
}

/// Writes capture frames to a JSONL file in append-only mode.
pub struct CaptureWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    frames_written: u64,
}

impl CaptureWriter {
    /// Create a new capture writer, writing the header as the first line.
    pub fn new(path: PathBuf, header: CaptureStreamHeader) -> MoodtuneResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);

        let header_json = serde_json::to_string(&header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| MoodtuneError::acquisition(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            path,
            frames_written: 0,
        })
    }

    /// Write a single frame as a JSONL line.
    pub fn write_frame(&mut self, frame: &CaptureFrame) -> MoodtuneResult<()> {
        let json = serde_json::to_string(frame)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| MoodtuneError::acquisition(format!("Failed to write frame: {e}")))?;
        self.frames_written += 1;

        // Flush every 100 frames for crash safety
        if self.frames_written % 100 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> MoodtuneResult<()> {
        self.writer
            .flush()
            .map_err(|e| MoodtuneError::acquisition(format!("Failed to flush frames: {e}")))?;
        Ok(())
    }

    /// Number of frames written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Path to the output file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for CaptureWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
