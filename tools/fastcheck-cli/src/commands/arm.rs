//! Analyze arm symmetry from a frames file.

use std::path::PathBuf;

use fastcheck_analysis_core::screening::{arm_report, collect_series};
use fastcheck_analysis_core::{ArmSymmetryScorer, ThresholdTable};
use fastcheck_capture_engine::load_frames_file;

use super::{parse_smoothing, print_report};

pub fn run(frames_path: PathBuf, threshold: f64, smoothing: String) -> anyhow::Result<()> {
    let strategy = parse_smoothing(&smoothing)?;
    let frames = load_frames_file(&frames_path)?;
    tracing::info!(frames = frames.len(), "Loaded arm capture");

    let scorer = ArmSymmetryScorer::with_defaults();
    let series = collect_series(&frames, &scorer);

    let thresholds = ThresholdTable {
        arm: threshold,
        ..Default::default()
    };
    let report = arm_report(&series, &thresholds, strategy);
    print_report(&report)
}
