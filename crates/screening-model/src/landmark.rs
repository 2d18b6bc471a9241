//! Landmark types produced by the external detectors.
//!
//! A landmark is a named or indexed anatomical reference point with
//! normalized image coordinates. Face-mesh output is a dense indexed list;
//! body-pose output is a sparse map of named points with per-point
//! visibility.

use serde::{Deserialize, Serialize};

/// A single detected landmark in normalized image coordinates.
///
/// `(0.0, 0.0)` is the top-left of the capture frame, `(1.0, 1.0)` the
/// bottom-right. Visibility is reported by the pose detector only; face-mesh
/// points omit it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X coordinate [0.0, 1.0].
    pub x: f64,

    /// Normalized Y coordinate [0.0, 1.0].
    pub y: f64,

    /// Detector confidence that the point is visible [0.0, 1.0].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Create a landmark without visibility (face-mesh style).
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    /// Create a landmark with visibility (pose style).
    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            visibility: Some(visibility),
        }
    }

    /// Visibility, treating an unreported value as fully visible.
    pub fn visibility_or_full(&self) -> f64 {
        self.visibility.unwrap_or(1.0)
    }

    /// Whether the landmark meets the given visibility floor.
    pub fn visible_above(&self, floor: f64) -> bool {
        self.visibility_or_full() >= floor
    }
}

/// Named body-pose points emitted by the external pose detector.
///
/// Only upper-body points are listed; the arm screening consumes shoulders
/// and wrists, the rest are carried through for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosePoint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
}

impl PosePoint {
    /// The four points the arm symmetry scorer requires.
    pub fn arm_screening_points() -> [PosePoint; 4] {
        [
            PosePoint::LeftShoulder,
            PosePoint::RightShoulder,
            PosePoint::LeftWrist,
            PosePoint::RightWrist,
        ]
    }
}
