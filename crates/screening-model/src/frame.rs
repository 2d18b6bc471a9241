//! Per-frame detector output for the Fastcheck frame stream.
//!
//! Frames are recorded in append-only JSONL format, one frame per line,
//! with optional `#`-prefixed header lines. Timestamps are monotonic
//! nanoseconds since capture start, so replayed files and live capture are
//! gated by the same session-window logic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::landmark::{Landmark, PosePoint};

/// Monotonic timestamp in nanoseconds since capture start.
pub type TimestampNs = u64;

/// One video frame's detector output with timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Monotonic nanoseconds since capture start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The detection payload.
    #[serde(flatten)]
    pub kind: FrameKind,
}

/// Discriminated union of per-frame detections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameKind {
    /// Face-mesh detection: dense indexed landmark list.
    FaceMesh {
        /// Landmarks indexed by the detector's mesh topology.
        landmarks: Vec<Landmark>,
    },

    /// Body-pose detection: sparse named landmark map.
    Pose {
        /// Named pose points with per-point visibility.
        landmarks: BTreeMap<PosePoint, Landmark>,
    },

    /// The detector ran and explicitly found no subject in the frame.
    NoDetection {},
}

impl LandmarkFrame {
    /// Create a face-mesh frame.
    pub fn face_mesh(timestamp_ns: TimestampNs, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp_ns,
            kind: FrameKind::FaceMesh { landmarks },
        }
    }

    /// Create a body-pose frame.
    pub fn pose(timestamp_ns: TimestampNs, landmarks: BTreeMap<PosePoint, Landmark>) -> Self {
        Self {
            timestamp_ns,
            kind: FrameKind::Pose { landmarks },
        }
    }

    /// Create an explicit no-detection frame.
    pub fn no_detection(timestamp_ns: TimestampNs) -> Self {
        Self {
            timestamp_ns,
            kind: FrameKind::NoDetection {},
        }
    }

    /// Timestamp as fractional seconds since capture start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }

    /// Whether this frame carries a face-mesh detection.
    pub fn has_face(&self) -> bool {
        matches!(self.kind, FrameKind::FaceMesh { .. })
    }

    /// Whether this frame carries a body-pose detection.
    pub fn has_pose(&self) -> bool {
        matches!(self.kind, FrameKind::Pose { .. })
    }
}

/// Parse frames from JSONL content (one JSON object per line).
pub fn parse_frames(jsonl: &str) -> Result<Vec<LandmarkFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[LandmarkFrame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
