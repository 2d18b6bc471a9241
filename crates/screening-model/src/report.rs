//! Report types returned by the screening endpoints.
//!
//! These are the wire contracts: every analysis returns a well-formed report
//! even when detection failed for the whole session, in which case the
//! `message` field explains the sentinel negative result.

use serde::{Deserialize, Serialize};

/// Result of a face symmetry screening session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceReport {
    /// Whether the session crossed the detection threshold.
    pub stroke_detected: bool,

    /// Mean smoothed symmetry score [0.0, 1.0].
    pub avg_symmetry: f64,

    /// Median smoothed symmetry score [0.0, 1.0].
    pub median_symmetry: f64,

    /// Derived asymmetry ratio: `max(0, 1 - avg_symmetry)`.
    pub stroke_ratio: f64,

    /// Standard deviation of the smoothed scores.
    pub symmetry_variability: f64,

    /// Number of frames that produced a valid score.
    pub frames_processed: usize,

    /// The threshold the verdict was compared against.
    pub threshold_used: f64,

    /// Present only for sentinel results (e.g., no face detected).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of an arm symmetry screening session.
///
/// Arm metrics are reported in the percentage domain to match the
/// user-facing convention (100 = perfectly symmetric).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmReport {
    /// Whether the session crossed the detection threshold.
    pub stroke_detected: bool,

    /// Mean smoothed symmetry as a percentage [0.0, 100.0].
    pub symmetry_percentage: f64,

    /// Median smoothed symmetry as a percentage.
    pub median_symmetry: f64,

    /// Standard deviation of the smoothed scores, as a percentage.
    pub symmetry_variability: f64,

    /// Number of frames that produced a valid score.
    pub frames_processed: usize,

    /// Number of frames in which the pose detector found a subject,
    /// including frames later excluded by the visibility floor.
    pub pose_detected_frames: usize,

    /// The threshold the verdict was compared against (percentage domain).
    pub threshold_used: f64,

    /// Present only for sentinel results (e.g., no pose detected).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of the speech screening stub.
///
/// Speech analysis is intentionally unimplemented: the report is always
/// negative with zero confidence, never a hidden no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechReport {
    pub stroke_detected: bool,
    pub confidence: f64,
}

/// Outcome of the notification fan-out for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOutcome {
    /// Contacts successfully notified.
    pub notifications_sent: usize,

    /// Contacts for which delivery failed.
    pub failed_contacts: usize,

    /// Non-blank contacts attempted.
    pub total_contacts: usize,
}

/// The combined multi-modal assessment, terminal value of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeAssessment {
    /// Overall verdict from the weighted combination.
    pub stroke_detected: bool,

    /// Per-modality verdicts.
    pub face_positive: bool,
    pub arm_positive: bool,
    pub speech_positive: bool,

    /// Weighted impairment sum [0.0, 1.0].
    pub combined_score: f64,

    /// Present when an alert dispatch was attempted; its tallies serialize
    /// as top-level fields of the assessment and are omitted entirely when
    /// no dispatch happened.
    #[serde(flatten)]
    pub notifications: Option<NotificationOutcome>,
}

/// Health probe response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
}

impl HealthReport {
    /// A healthy report stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl FaceReport {
    /// Sentinel report for a session with zero valid face scores.
    pub fn no_detection(threshold: f64) -> Self {
        Self {
            stroke_detected: false,
            avg_symmetry: 0.0,
            median_symmetry: 0.0,
            stroke_ratio: 0.0,
            symmetry_variability: 0.0,
            frames_processed: 0,
            threshold_used: threshold,
            message: Some("No face detected during test.".to_string()),
        }
    }
}

impl ArmReport {
    /// Sentinel report for a session with zero valid arm scores.
    pub fn no_detection(threshold_percentage: f64, pose_detected_frames: usize) -> Self {
        Self {
            stroke_detected: false,
            symmetry_percentage: 0.0,
            median_symmetry: 0.0,
            symmetry_variability: 0.0,
            frames_processed: 0,
            pose_detected_frames,
            threshold_used: threshold_percentage,
            message: Some("No pose detected during test.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_sentinel_is_negative_with_message() {
        let report = FaceReport::no_detection(0.75);
        assert!(!report.stroke_detected);
        assert_eq!(report.frames_processed, 0);
        assert!(report.message.is_some());
        assert_eq!(report.threshold_used, 0.75);
    }

    #[test]
    fn test_face_report_json_omits_absent_message() {
        let report = FaceReport {
            stroke_detected: true,
            avg_symmetry: 0.6,
            median_symmetry: 0.6,
            stroke_ratio: 0.4,
            symmetry_variability: 0.0,
            frames_processed: 8,
            threshold_used: 0.75,
            message: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("message"));
        assert!(json.contains("\"stroke_detected\":true"));
    }

    #[test]
    fn test_assessment_roundtrip() {
        let assessment = StrokeAssessment {
            stroke_detected: true,
            face_positive: true,
            arm_positive: true,
            speech_positive: false,
            combined_score: 0.8,
            notifications: Some(NotificationOutcome {
                notifications_sent: 2,
                failed_contacts: 1,
                total_contacts: 3,
            }),
        };
        let json = serde_json::to_string(&assessment).unwrap();
        // The notification tallies are top-level fields, not a nested object.
        assert!(json.contains("\"notifications_sent\":2"));
        assert!(!json.contains("\"notifications\":"));
        let parsed: StrokeAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(assessment, parsed);
    }

    #[test]
    fn test_assessment_without_dispatch_omits_tallies() {
        let assessment = StrokeAssessment {
            stroke_detected: false,
            face_positive: false,
            arm_positive: false,
            speech_positive: false,
            combined_score: 0.0,
            notifications: None,
        };
        let json = serde_json::to_string(&assessment).unwrap();
        assert!(!json.contains("notifications_sent"));
        let parsed: StrokeAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.notifications, None);
    }

    #[test]
    fn test_health_report_timestamp_is_rfc3339() {
        let report = HealthReport::now();
        assert_eq!(report.status, "healthy");
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
