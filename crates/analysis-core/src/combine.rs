//! Multi-modal combination.
//!
//! Combiner inputs are impairment likelihoods: the complement of the
//! symmetry convention, where higher means *worse*. The conversion from a
//! per-modality verdict happens exactly once, at this boundary, via
//! [`impairment_of`]; the speech stub contributes its continuous confidence
//! directly.

use fastcheck_screening_model::StrokeAssessment;

use crate::classify::ClassificationResult;

/// Weights for the impairment sum, plus the alert threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinerWeights {
    pub face: f64,
    pub arm: f64,
    pub speech: f64,

    /// Alert fires when the combined score strictly exceeds this value.
    pub alert_threshold: f64,
}

impl Default for CombinerWeights {
    fn default() -> Self {
        Self {
            face: 0.4,
            arm: 0.4,
            speech: 0.2,
            alert_threshold: 0.5,
        }
    }
}

/// Impairment likelihood of a per-modality verdict.
pub fn impairment_of(result: &ClassificationResult) -> f64 {
    if result.stroke_detected {
        1.0
    } else {
        0.0
    }
}

/// Combine per-modality impairment likelihoods into one assessment.
///
/// All inputs are in `[0.0, 1.0]`. A combined score of exactly the alert
/// threshold is classified negative (strict inequality).
pub fn combine(
    face_impairment: f64,
    arm_impairment: f64,
    speech_impairment: f64,
    weights: &CombinerWeights,
) -> StrokeAssessment {
    let combined_score = weights.face * face_impairment
        + weights.arm * arm_impairment
        + weights.speech * speech_impairment;

    StrokeAssessment {
        stroke_detected: combined_score > weights.alert_threshold,
        face_positive: face_impairment > 0.5,
        arm_positive: arm_impairment > 0.5,
        speech_positive: speech_impairment > 0.5,
        combined_score,
        notifications: None,
    }
}
