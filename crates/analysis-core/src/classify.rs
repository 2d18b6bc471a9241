//! Threshold classification of aggregated session scores.
//!
//! The threshold table is a configuration value built once per request and
//! passed down; batch and live capture legitimately run with different
//! values, so nothing in the pipeline hard-codes them.

use fastcheck_screening_model::Modality;

use crate::aggregate::AggregateResult;

/// Per-modality detection thresholds on the mean smoothed symmetry score.
///
/// Detection direction is `score < threshold` for every modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    /// Face threshold on the mean smoothed score.
    pub face: f64,

    /// Arm threshold on the mean smoothed score.
    pub arm: f64,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            face: 0.75,
            arm: 0.70,
        }
    }
}

impl ThresholdTable {
    /// The threshold applied to the given modality, if it has one.
    pub fn threshold_for(&self, modality: Modality) -> Option<f64> {
        match modality {
            Modality::Face => Some(self.face),
            Modality::Arm => Some(self.arm),
            Modality::Speech => None,
        }
    }
}

/// Binary verdict for one modality in one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    pub modality: Modality,
    pub stroke_detected: bool,

    /// The mean smoothed symmetry score the verdict was derived from.
    pub metric_value: f64,

    /// The threshold actually applied.
    pub threshold_used: f64,
}

impl ClassificationResult {
    /// Sentinel result for a session with zero valid scores.
    ///
    /// Distinguished from a genuine negative at the report boundary by the
    /// report's `message` field.
    pub fn no_detection(modality: Modality, threshold: f64) -> Self {
        Self {
            modality,
            stroke_detected: false,
            metric_value: 0.0,
            threshold_used: threshold,
        }
    }
}

/// Classify one modality's aggregate against its threshold.
///
/// Speech never reaches this function: the stub carries no aggregate and
/// has no entry in the threshold table.
pub fn classify(
    modality: Modality,
    aggregate: &AggregateResult,
    threshold: f64,
) -> ClassificationResult {
    ClassificationResult {
        modality,
        stroke_detected: aggregate.mean < threshold,
        metric_value: aggregate.mean,
        threshold_used: threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, SmoothingStrategy};

    fn agg_of(values: &[f64]) -> AggregateResult {
        aggregate(values, SmoothingStrategy::WindowedMedian).unwrap()
    }

    #[test]
    fn test_face_below_threshold_detects() {
        let table = ThresholdTable::default();
        let result = classify(Modality::Face, &agg_of(&[0.6; 8]), table.face);
        assert!(result.stroke_detected);
        assert!((result.metric_value - 0.6).abs() < 1e-12);
        assert_eq!(result.threshold_used, 0.75);
    }

    #[test]
    fn test_face_above_threshold_is_negative() {
        let result = classify(Modality::Face, &agg_of(&[0.9; 8]), 0.75);
        assert!(!result.stroke_detected);
    }

    #[test]
    fn test_score_exactly_at_threshold_is_negative() {
        // Detection is strict: score < threshold.
        let result = classify(Modality::Arm, &agg_of(&[0.7; 6]), 0.7);
        assert!(!result.stroke_detected);
    }

    #[test]
    fn test_custom_threshold_overrides_default() {
        let result = classify(Modality::Face, &agg_of(&[0.85; 8]), 0.9);
        assert!(result.stroke_detected);
        assert_eq!(result.threshold_used, 0.9);
    }

    #[test]
    fn test_threshold_table_lookup() {
        let table = ThresholdTable::default();
        assert_eq!(table.threshold_for(Modality::Face), Some(0.75));
        assert_eq!(table.threshold_for(Modality::Arm), Some(0.70));
        assert_eq!(table.threshold_for(Modality::Speech), None);
    }

    #[test]
    fn test_no_detection_sentinel_is_negative() {
        let sentinel = ClassificationResult::no_detection(Modality::Face, 0.75);
        assert!(!sentinel.stroke_detected);
        assert_eq!(sentinel.metric_value, 0.0);
        assert_eq!(sentinel.threshold_used, 0.75);
    }
}
