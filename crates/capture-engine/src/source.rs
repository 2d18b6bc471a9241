//! Landmark frame sources.
//!
//! A source yields one [`LandmarkFrame`] per video frame, already run
//! through the external detectors. `next_frame` is allowed to block until a
//! frame is available (live capture behaves exactly like that), which is why
//! sessions run on a dedicated worker rather than a request-handling thread.

use std::path::Path;

use fastcheck_common::error::{FastcheckError, FastcheckResult};
use fastcheck_screening_model::{parse_frames, LandmarkFrame};

/// A blocking stream of detector output frames.
///
/// `Ok(None)` signals end of stream; an error is an acquisition failure and
/// is fatal for the session.
pub trait LandmarkSource: Send {
    fn next_frame(&mut self) -> FastcheckResult<Option<LandmarkFrame>>;
}

/// Source backed by an in-memory frame list.
///
/// Used for batch uploads and tests; frames are yielded in order without
/// pacing, their embedded timestamps drive the session window.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    frames: std::vec::IntoIter<LandmarkFrame>,
}

impl ReplaySource {
    /// Create a source from frames already in memory.
    pub fn from_frames(frames: Vec<LandmarkFrame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }

    /// Load a source from a frames JSONL file.
    pub fn from_path(path: &Path) -> FastcheckResult<Self> {
        Ok(Self::from_frames(load_frames_file(path)?))
    }
}

/// Load and validate a frames JSONL file before any analysis begins.
///
/// Only `.jsonl` files are accepted; a wrong extension or an unparsable
/// line is a malformed-input rejection, a missing file is not-found, and an
/// unreadable file is an acquisition failure.
pub fn load_frames_file(path: &Path) -> FastcheckResult<Vec<LandmarkFrame>> {
    if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
        return Err(FastcheckError::malformed_input(format!(
            "unsupported frames file type: {} (expected .jsonl)",
            path.display()
        )));
    }
    if !path.exists() {
        return Err(FastcheckError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| FastcheckError::acquisition(format!("cannot read frames file: {e}")))?;
    let frames = parse_frames(&content)
        .map_err(|e| FastcheckError::malformed_input(format!("invalid frame: {e}")))?;

    tracing::debug!(path = %path.display(), frames = frames.len(), "Loaded frames file");
    Ok(frames)
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> FastcheckResult<Option<LandmarkFrame>> {
        Ok(self.frames.next())
    }
}

/// Source that fails on first read.
///
/// Stands in for a camera that cannot be opened; useful for exercising the
/// acquisition-failure path.
#[derive(Debug, Clone)]
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LandmarkSource for FailingSource {
    fn next_frame(&mut self) -> FastcheckResult<Option<LandmarkFrame>> {
        Err(FastcheckError::acquisition(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_source_yields_in_order_then_ends() {
        let mut source = ReplaySource::from_frames(vec![
            LandmarkFrame::no_detection(0),
            LandmarkFrame::no_detection(100),
        ]);
        assert_eq!(source.next_frame().unwrap().unwrap().timestamp_ns, 0);
        assert_eq!(source.next_frame().unwrap().unwrap().timestamp_ns, 100);
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_from_path_rejects_wrong_extension() {
        let err = ReplaySource::from_path(Path::new("frames.mp4")).unwrap_err();
        assert!(matches!(err, FastcheckError::MalformedInput { .. }));
    }

    #[test]
    fn test_from_path_missing_file_is_not_found() {
        let err = ReplaySource::from_path(Path::new("/nonexistent/frames.jsonl")).unwrap_err();
        assert!(matches!(err, FastcheckError::FileNotFound { .. }));
    }

    #[test]
    fn test_failing_source_reports_acquisition_error() {
        let mut source = FailingSource::new("camera unavailable");
        let err = source.next_frame().unwrap_err();
        assert!(matches!(err, FastcheckError::Acquisition { .. }));
    }
}
