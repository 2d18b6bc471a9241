//! Screening modalities.

use serde::{Deserialize, Serialize};

/// One of the independent screening channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Facial symmetry from face-mesh landmarks.
    Face,
    /// Arm posture symmetry from body-pose landmarks.
    Arm,
    /// Speech analysis (explicit stub, always negative).
    Speech,
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modality::Face => write!(f, "face"),
            Modality::Arm => write!(f, "arm"),
            Modality::Speech => write!(f, "speech"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_display_matches_serde() {
        for modality in [Modality::Face, Modality::Arm, Modality::Speech] {
            let json = serde_json::to_string(&modality).unwrap();
            assert_eq!(json, format!("\"{modality}\""));
        }
    }
}
