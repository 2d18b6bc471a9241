//! Analyze face symmetry from a frames file.

use std::path::PathBuf;

use fastcheck_analysis_core::screening::{collect_series, face_report};
use fastcheck_analysis_core::{FaceSymmetryScorer, ThresholdTable};
use fastcheck_capture_engine::load_frames_file;

use super::{parse_smoothing, print_report};

pub fn run(frames_path: PathBuf, threshold: f64, smoothing: String) -> anyhow::Result<()> {
    let strategy = parse_smoothing(&smoothing)?;
    let frames = load_frames_file(&frames_path)?;
    tracing::info!(frames = frames.len(), "Loaded face capture");

    let scorer = FaceSymmetryScorer::with_defaults();
    let series = collect_series(&frames, &scorer);

    let thresholds = ThresholdTable {
        face: threshold,
        ..Default::default()
    };
    let report = face_report(&series, &thresholds, strategy);
    print_report(&report)
}
