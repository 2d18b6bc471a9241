//! Run a windowed screening session over a frames file.
//!
//! Unlike the batch analyze commands, this path applies the modality's
//! warm-up and duration gates and runs the (blocking) source on a dedicated
//! worker, the same shape a live camera capture takes.

use std::path::PathBuf;

use fastcheck_analysis_core::screening::{arm_report, face_report};
use fastcheck_analysis_core::{ArmSymmetryScorer, FaceSymmetryScorer, ThresholdTable};
use fastcheck_capture_engine::{run_session, ReplaySource, ScreeningSession, SessionWindow};

use super::{parse_smoothing, print_report};

pub async fn run(
    frames_path: PathBuf,
    modality: String,
    smoothing: String,
    threshold: Option<f64>,
) -> anyhow::Result<()> {
    let strategy = parse_smoothing(&smoothing)?;
    let source = Box::new(ReplaySource::from_path(&frames_path)?);
    let mut thresholds = ThresholdTable::default();

    match modality.as_str() {
        "face" => {
            if let Some(t) = threshold {
                thresholds.face = t;
            }
            let session =
                ScreeningSession::new(FaceSymmetryScorer::with_defaults(), SessionWindow::face());
            let series = run_session(session, source).await?;
            print_report(&face_report(&series, &thresholds, strategy))
        }
        "arm" => {
            if let Some(t) = threshold {
                thresholds.arm = t;
            }
            let session =
                ScreeningSession::new(ArmSymmetryScorer::with_defaults(), SessionWindow::arm());
            let series = run_session(session, source).await?;
            print_report(&arm_report(&series, &thresholds, strategy))
        }
        other => anyhow::bail!("invalid --modality (use face|arm): {other}"),
    }
}
