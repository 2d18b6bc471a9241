//! Report assembly: from a finished score series to a wire report.
//!
//! This is the glue between the pure pipeline stages. Batch analysis feeds
//! an uploaded frame list through [`collect_series`]; live capture builds
//! the series inside a session. Either way the finished series flows
//! through aggregation and classification into the modality report.

use fastcheck_screening_model::{
    ArmReport, FaceReport, LandmarkFrame, Modality, SpeechReport, StrokeAssessment,
};

use crate::aggregate::{aggregate, ScoreSeries, SmoothingStrategy};
use crate::classify::classify;
use crate::combine::{combine, CombinerWeights};
use crate::symmetry::FrameScorer;
use crate::ThresholdTable;

/// Score a batch of frames into a finished series.
///
/// Frames of the wrong detection kind count as seen but undetermined, the
/// same treatment a live session gives them.
pub fn collect_series<S: FrameScorer>(frames: &[LandmarkFrame], scorer: &S) -> ScoreSeries {
    let mut series = ScoreSeries::new(scorer.modality());
    for frame in frames {
        series.record(scorer.detects(frame), scorer.score(frame));
    }
    series
}

/// Build the face report for a finished series.
pub fn face_report(
    series: &ScoreSeries,
    thresholds: &ThresholdTable,
    strategy: SmoothingStrategy,
) -> FaceReport {
    let Some(agg) = aggregate(&series.values(), strategy) else {
        return FaceReport::no_detection(thresholds.face);
    };

    let classification = classify(Modality::Face, &agg, thresholds.face);
    tracing::info!(
        mean = agg.mean,
        median = agg.median,
        stddev = agg.stddev,
        trimmed = agg.trimmed_count,
        detected = classification.stroke_detected,
        "Face session classified"
    );

    FaceReport {
        stroke_detected: classification.stroke_detected,
        avg_symmetry: agg.mean,
        median_symmetry: agg.median,
        stroke_ratio: (1.0 - agg.mean).max(0.0),
        symmetry_variability: agg.stddev,
        frames_processed: series.len(),
        threshold_used: classification.threshold_used,
        message: None,
    }
}

/// Build the arm report for a finished series.
///
/// The verdict is computed in score space; the report converts to the
/// percentage domain users see (100 = perfectly symmetric).
pub fn arm_report(
    series: &ScoreSeries,
    thresholds: &ThresholdTable,
    strategy: SmoothingStrategy,
) -> ArmReport {
    let Some(agg) = aggregate(&series.values(), strategy) else {
        return ArmReport::no_detection(thresholds.arm * 100.0, series.detected_frames());
    };

    let classification = classify(Modality::Arm, &agg, thresholds.arm);
    tracing::info!(
        mean = agg.mean,
        median = agg.median,
        stddev = agg.stddev,
        trimmed = agg.trimmed_count,
        detected = classification.stroke_detected,
        "Arm session classified"
    );

    ArmReport {
        stroke_detected: classification.stroke_detected,
        symmetry_percentage: agg.mean * 100.0,
        median_symmetry: agg.median * 100.0,
        symmetry_variability: agg.stddev * 100.0,
        frames_processed: series.len(),
        pose_detected_frames: series.detected_frames(),
        threshold_used: classification.threshold_used * 100.0,
        message: None,
    }
}

/// The speech analysis stub: always a negative report with zero confidence.
///
/// Speech screening is intentionally unimplemented; callers get an explicit
/// fixed result rather than a hidden no-op.
pub fn speech_report() -> SpeechReport {
    SpeechReport {
        stroke_detected: false,
        confidence: 0.0,
    }
}

/// Combine three per-modality verdicts into the overall assessment.
///
/// Boolean verdicts convert to impairment likelihoods at this boundary;
/// the speech slot accepts a continuous confidence so the stub's 0.0 and a
/// future real analyzer both fit.
pub fn assess(
    face_positive: bool,
    arm_positive: bool,
    speech_impairment: f64,
    weights: &CombinerWeights,
) -> StrokeAssessment {
    combine(
        if face_positive { 1.0 } else { 0.0 },
        if arm_positive { 1.0 } else { 0.0 },
        speech_impairment,
        weights,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::{ArmSymmetryScorer, FaceSymmetryScorer};
    use fastcheck_screening_model::{Landmark, PosePoint};
    use std::collections::BTreeMap;

    fn symmetric_pose_frame(timestamp_ns: u64, visibility: f64) -> LandmarkFrame {
        let landmarks: BTreeMap<PosePoint, Landmark> = [
            (PosePoint::LeftShoulder, (0.4, 0.3)),
            (PosePoint::RightShoulder, (0.6, 0.3)),
            (PosePoint::LeftWrist, (0.2, 0.8)),
            (PosePoint::RightWrist, (0.8, 0.8)),
        ]
        .into_iter()
        .map(|(p, (x, y))| (p, Landmark::with_visibility(x, y, visibility)))
        .collect();
        LandmarkFrame::pose(timestamp_ns, landmarks)
    }

    #[test]
    fn test_collect_series_counts_wrong_kind_as_undetermined() {
        let scorer = FaceSymmetryScorer::with_defaults();
        let frames = vec![
            LandmarkFrame::no_detection(0),
            symmetric_pose_frame(100, 0.9),
        ];
        let series = collect_series(&frames, &scorer);
        assert_eq!(series.frames_seen(), 2);
        assert_eq!(series.detected_frames(), 0);
        assert!(series.is_empty());
    }

    #[test]
    fn test_empty_face_session_yields_sentinel_report() {
        let series = ScoreSeries::new(Modality::Face);
        let report = face_report(
            &series,
            &ThresholdTable::default(),
            SmoothingStrategy::WindowedMedian,
        );
        assert!(!report.stroke_detected);
        assert_eq!(report.frames_processed, 0);
        assert!(report.message.is_some());
    }

    #[test]
    fn test_empty_arm_session_reports_pose_frames_seen() {
        let scorer = ArmSymmetryScorer::with_defaults();
        // Pose present in every frame but always under the visibility floor.
        let frames: Vec<LandmarkFrame> = (0..4)
            .map(|i| symmetric_pose_frame(i, 0.2))
            .collect();
        let series = collect_series(&frames, &scorer);
        let report = arm_report(
            &series,
            &ThresholdTable::default(),
            SmoothingStrategy::DecileTrim,
        );
        assert!(!report.stroke_detected);
        assert_eq!(report.frames_processed, 0);
        assert_eq!(report.pose_detected_frames, 4);
        assert!(report.message.is_some());
    }

    #[test]
    fn test_arm_report_uses_percentage_domain() {
        let scorer = ArmSymmetryScorer::with_defaults();
        let frames: Vec<LandmarkFrame> = (0..6)
            .map(|i| symmetric_pose_frame(i, 0.9))
            .collect();
        let series = collect_series(&frames, &scorer);
        let report = arm_report(
            &series,
            &ThresholdTable::default(),
            SmoothingStrategy::WindowedMedian,
        );
        assert!(!report.stroke_detected);
        assert!((report.symmetry_percentage - 100.0).abs() < 1e-9);
        assert_eq!(report.threshold_used, 70.0);
        assert_eq!(report.frames_processed, 6);
    }

    #[test]
    fn test_speech_stub_is_fixed_negative() {
        let report = speech_report();
        assert!(!report.stroke_detected);
        assert_eq!(report.confidence, 0.0);
    }

    #[test]
    fn test_assess_two_positives_alert() {
        let assessment = assess(true, true, 0.0, &CombinerWeights::default());
        assert!(assessment.stroke_detected);
        assert!((assessment.combined_score - 0.8).abs() < 1e-12);
    }
}
