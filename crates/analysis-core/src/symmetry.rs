//! Per-frame symmetry scoring.
//!
//! Both scorers are pure functions over one frame's landmarks. They return
//! `None` ("undetermined") when the frame cannot be scored (no detection,
//! missing points, visibility below the floor) and the session simply
//! skips such frames. All distances are midpoint-relative so the score is
//! invariant to where the subject sits in the frame and to their scale.

use std::collections::BTreeMap;

use fastcheck_screening_model::{FrameKind, Landmark, LandmarkFrame, Modality, PosePoint};

/// A per-frame scorer for one modality.
///
/// The session loop drives any scorer through this seam: `detects` feeds the
/// detection tally, `score` feeds the score series.
pub trait FrameScorer {
    /// The modality this scorer produces scores for.
    fn modality(&self) -> Modality;

    /// Whether the frame carries the detection kind this scorer consumes.
    fn detects(&self, frame: &LandmarkFrame) -> bool;

    /// Score one frame, or `None` when the frame is undetermined.
    ///
    /// Returned values are always within `[0.0, 1.0]`.
    fn score(&self, frame: &LandmarkFrame) -> Option<f64>;
}

/// Left/right face-mesh index pairs used for symmetry, spanning cheeks,
/// eye regions, mouth, jawline, and nose.
pub const FACE_SYMMETRY_PAIRS: [(usize, usize); 15] = [
    // Cheeks
    (234, 454),
    (227, 447),
    (137, 366),
    // Eye region
    (130, 359),
    (133, 362),
    (145, 374),
    // Mouth region
    (61, 291),
    (84, 314),
    (17, 18),
    (200, 199),
    // Jawline
    (172, 397),
    (136, 365),
    (150, 379),
    // Nose region
    (98, 327),
    (115, 344),
];

/// The outermost cheek pair, used to estimate face width.
pub const FACE_WIDTH_PAIR: (usize, usize) = (234, 454);

/// Configuration for the face symmetry scorer.
#[derive(Debug, Clone)]
pub struct FaceSymmetryConfig {
    /// Left/right landmark index pairs to compare.
    pub pairs: Vec<(usize, usize)>,

    /// Index pair whose horizontal span estimates face width.
    pub width_pair: (usize, usize),

    /// Horizontal midline in normalized coordinates.
    pub midline_x: f64,

    /// Strength of the vertical de-weighting: pairs far from the horizontal
    /// symmetry axis contribute less (they shift naturally with expression).
    pub vertical_weight: f64,

    /// Floor guard added to the face width before division.
    pub width_epsilon: f64,
}

impl Default for FaceSymmetryConfig {
    fn default() -> Self {
        Self {
            pairs: FACE_SYMMETRY_PAIRS.to_vec(),
            width_pair: FACE_WIDTH_PAIR,
            midline_x: 0.5,
            vertical_weight: 0.5,
            width_epsilon: 1e-6,
        }
    }
}

/// Face symmetry scorer.
///
/// For each configured pair, compares each side's horizontal distance from
/// the vertical midline, de-weighted by vertical offset from the midline,
/// then normalizes the average deviation by half the face width.
#[derive(Debug, Clone)]
pub struct FaceSymmetryScorer {
    config: FaceSymmetryConfig,
}

impl FaceSymmetryScorer {
    /// Create a scorer with the given configuration.
    pub fn new(config: FaceSymmetryConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(FaceSymmetryConfig::default())
    }

    /// Score a raw face-mesh landmark list.
    pub fn score_landmarks(&self, landmarks: &[Landmark]) -> Option<f64> {
        if landmarks.is_empty() {
            return None;
        }

        let cfg = &self.config;
        let mut deviations = Vec::with_capacity(cfg.pairs.len());
        for &(left_idx, right_idx) in &cfg.pairs {
            let left = landmarks.get(left_idx)?;
            let right = landmarks.get(right_idx)?;

            let left_dist = (left.x - cfg.midline_x).abs();
            let right_dist = (right.x - cfg.midline_x).abs();
            let y_factor = 1.0 + (left.y - 0.5).abs() * cfg.vertical_weight;
            deviations.push((left_dist - right_dist).abs() / y_factor);
        }

        let (width_left, width_right) = cfg.width_pair;
        let face_width =
            (landmarks.get(width_left)?.x - landmarks.get(width_right)?.x).abs() + cfg.width_epsilon;

        let avg_deviation = deviations.iter().sum::<f64>() / deviations.len() as f64;
        let score = 1.0 - avg_deviation / (face_width * 0.5);
        Some(score.clamp(0.0, 1.0))
    }
}

impl FrameScorer for FaceSymmetryScorer {
    fn modality(&self) -> Modality {
        Modality::Face
    }

    fn detects(&self, frame: &LandmarkFrame) -> bool {
        frame.has_face()
    }

    fn score(&self, frame: &LandmarkFrame) -> Option<f64> {
        match &frame.kind {
            FrameKind::FaceMesh { landmarks } => self.score_landmarks(landmarks),
            _ => None,
        }
    }
}

/// Configuration for the arm symmetry scorer.
#[derive(Debug, Clone)]
pub struct ArmSymmetryConfig {
    /// Minimum per-point visibility for a frame to be scored.
    pub visibility_floor: f64,

    /// Gain applied to the wrist height deviation before clamping.
    pub height_gain: f64,

    /// Gain applied to the wrist lateral deviation before clamping.
    pub lateral_gain: f64,
}

impl Default for ArmSymmetryConfig {
    fn default() -> Self {
        Self {
            visibility_floor: 0.5,
            height_gain: 4.0,
            lateral_gain: 3.0,
        }
    }
}

/// Arm symmetry scorer.
///
/// Combines two equally weighted sub-scores measured against the shoulder
/// midpoint: wrist height symmetry and wrist lateral symmetry.
#[derive(Debug, Clone)]
pub struct ArmSymmetryScorer {
    config: ArmSymmetryConfig,
}

impl ArmSymmetryScorer {
    /// Create a scorer with the given configuration.
    pub fn new(config: ArmSymmetryConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ArmSymmetryConfig::default())
    }

    /// Score a raw pose landmark map.
    pub fn score_pose(&self, landmarks: &BTreeMap<PosePoint, Landmark>) -> Option<f64> {
        let cfg = &self.config;

        let mut required = [Landmark::new(0.0, 0.0); 4];
        for (slot, point) in required
            .iter_mut()
            .zip(PosePoint::arm_screening_points())
        {
            let lm = landmarks.get(&point)?;
            if !lm.visible_above(cfg.visibility_floor) {
                return None;
            }
            *slot = *lm;
        }
        let [left_shoulder, right_shoulder, left_wrist, right_wrist] = required;

        // Height symmetry: wrist vertical distances from the shoulder midpoint.
        let shoulder_mid_y = (left_shoulder.y + right_shoulder.y) / 2.0;
        let left_height = (left_wrist.y - shoulder_mid_y).abs();
        let right_height = (right_wrist.y - shoulder_mid_y).abs();
        let height_symmetry = (1.0 - (left_height - right_height).abs() * cfg.height_gain).max(0.0);

        // Lateral symmetry: wrist horizontal distances from the body center.
        let body_center_x = (left_shoulder.x + right_shoulder.x) / 2.0;
        let left_lateral = (left_wrist.x - body_center_x).abs();
        let right_lateral = (right_wrist.x - body_center_x).abs();
        let lateral_symmetry =
            (1.0 - (left_lateral - right_lateral).abs() * cfg.lateral_gain).max(0.0);

        let combined = height_symmetry * 0.5 + lateral_symmetry * 0.5;
        Some(combined.clamp(0.0, 1.0))
    }
}

impl FrameScorer for ArmSymmetryScorer {
    fn modality(&self) -> Modality {
        Modality::Arm
    }

    fn detects(&self, frame: &LandmarkFrame) -> bool {
        frame.has_pose()
    }

    fn score(&self, frame: &LandmarkFrame) -> Option<f64> {
        match &frame.kind {
            FrameKind::Pose { landmarks } => self.score_pose(landmarks),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A face-mesh list big enough for the default pair table, with every
    /// point mirrored exactly across the midline.
    fn mirrored_face() -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); 468];
        for &(left_idx, right_idx) in &FACE_SYMMETRY_PAIRS {
            // Spread pairs over distinct offsets and heights.
            let offset = 0.05 + (left_idx % 7) as f64 * 0.03;
            let y = 0.3 + (left_idx % 5) as f64 * 0.1;
            landmarks[left_idx] = Landmark::new(0.5 - offset, y);
            landmarks[right_idx] = Landmark::new(0.5 + offset, y);
        }
        landmarks
    }

    fn arm_pose(
        left_wrist: (f64, f64),
        right_wrist: (f64, f64),
        visibility: f64,
    ) -> BTreeMap<PosePoint, Landmark> {
        [
            (PosePoint::LeftShoulder, (0.4, 0.3)),
            (PosePoint::RightShoulder, (0.6, 0.3)),
            (PosePoint::LeftWrist, left_wrist),
            (PosePoint::RightWrist, right_wrist),
        ]
        .into_iter()
        .map(|(p, (x, y))| (p, Landmark::with_visibility(x, y, visibility)))
        .collect()
    }

    #[test]
    fn test_mirrored_face_scores_perfect() {
        let scorer = FaceSymmetryScorer::with_defaults();
        let score = scorer.score_landmarks(&mirrored_face()).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetric_face_scores_below_mirrored() {
        let scorer = FaceSymmetryScorer::with_defaults();
        let mut landmarks = mirrored_face();
        // Droop one mouth corner outward.
        landmarks[61].x -= 0.08;
        let score = scorer.score_landmarks(&landmarks).unwrap();
        assert!(score < 1.0);
        assert!(score >= 0.0);
    }

    #[test]
    fn test_empty_face_mesh_is_undetermined() {
        let scorer = FaceSymmetryScorer::with_defaults();
        assert_eq!(scorer.score_landmarks(&[]), None);
    }

    #[test]
    fn test_short_face_mesh_is_undetermined() {
        // Landmark list shorter than the configured indices.
        let scorer = FaceSymmetryScorer::with_defaults();
        let landmarks = vec![Landmark::new(0.5, 0.5); 100];
        assert_eq!(scorer.score_landmarks(&landmarks), None);
    }

    #[test]
    fn test_face_scorer_ignores_pose_frames() {
        let scorer = FaceSymmetryScorer::with_defaults();
        let frame = LandmarkFrame::pose(0, arm_pose((0.2, 0.8), (0.8, 0.8), 0.9));
        assert!(!scorer.detects(&frame));
        assert_eq!(scorer.score(&frame), None);
    }

    #[test]
    fn test_symmetric_arms_score_perfect() {
        let scorer = ArmSymmetryScorer::with_defaults();
        let score = scorer.score_pose(&arm_pose((0.2, 0.8), (0.8, 0.8), 0.9)).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dropped_wrist_lowers_score() {
        let scorer = ArmSymmetryScorer::with_defaults();
        let level = scorer.score_pose(&arm_pose((0.2, 0.8), (0.8, 0.8), 0.9)).unwrap();
        let dropped = scorer.score_pose(&arm_pose((0.2, 0.8), (0.8, 0.95), 0.9)).unwrap();
        assert!(dropped < level);
    }

    #[test]
    fn test_low_visibility_is_undetermined() {
        let scorer = ArmSymmetryScorer::with_defaults();
        assert_eq!(scorer.score_pose(&arm_pose((0.2, 0.8), (0.8, 0.8), 0.4)), None);
    }

    #[test]
    fn test_missing_required_point_is_undetermined() {
        let scorer = ArmSymmetryScorer::with_defaults();
        let mut landmarks = arm_pose((0.2, 0.8), (0.8, 0.8), 0.9);
        landmarks.remove(&PosePoint::RightWrist);
        assert_eq!(scorer.score_pose(&landmarks), None);
    }

    #[test]
    fn test_extreme_asymmetry_clamps_to_zero() {
        let scorer = ArmSymmetryScorer::with_defaults();
        // One arm raised high and wide, the other hanging at the hip.
        let score = scorer.score_pose(&arm_pose((0.05, 0.05), (0.62, 0.85), 0.9)).unwrap();
        assert!(score >= 0.0);
        assert!(score < 0.2);
    }

    #[test]
    fn test_lateral_offset_monotonicity() {
        // Pushing one wrist farther from the body-center line never raises
        // the score.
        let scorer = ArmSymmetryScorer::with_defaults();
        let mut previous = f64::INFINITY;
        for step in 0..8 {
            let offset = 0.30 + step as f64 * 0.02;
            let score = scorer
                .score_pose(&arm_pose((0.2, 0.8), (0.5 + offset, 0.8), 0.9))
                .unwrap();
            assert!(score <= previous + 1e-12);
            previous = score;
        }
    }
}
