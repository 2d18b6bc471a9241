//! Alert message construction.

use fastcheck_screening_model::StrokeAssessment;

/// Build the emergency alert text for a positive assessment.
///
/// The message is a pure function of the assessment so every contact
/// receives identical content and tests can pin it exactly.
pub fn build_alert_message(assessment: &StrokeAssessment) -> String {
    let face = if assessment.face_positive {
        "ASYMMETRICAL"
    } else {
        "NORMAL"
    };
    let arm = if assessment.arm_positive {
        "IMPAIRED"
    } else {
        "NORMAL"
    };
    let speech = if assessment.speech_positive {
        "IMPAIRED"
    } else {
        "NORMAL"
    };

    format!(
        "STROKE ALERT: potential stroke symptoms detected.\n\
         \n\
         Test results:\n\
         - Face symmetry: {face}\n\
         - Arm movement: {arm}\n\
         - Speech: {speech}\n\
         \n\
         Combined score: {score:.2}\n\
         \n\
         SEEK IMMEDIATE MEDICAL ATTENTION.\n\
         Call emergency services or go to the nearest emergency room.",
        score = assessment.combined_score,
    )
}
