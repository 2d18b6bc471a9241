//! Fastcheck Analysis Core — the landmark-to-decision pipeline
//!
//! Turns per-frame landmark detections into a per-session verdict:
//! - **Symmetry scoring:** Per-frame left/right symmetry for face and arm
//! - **Temporal aggregation:** Smoothing/trimming over a finished session
//! - **Threshold classification:** Binary verdict per modality
//! - **Multi-modal combination:** Weighted impairment sum across modalities
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod aggregate;
pub mod classify;
pub mod combine;
pub mod screening;
pub mod symmetry;

pub use aggregate::{AggregateResult, ScoreSeries, SmoothingStrategy, SymmetryScore};
pub use classify::{ClassificationResult, ThresholdTable};
pub use combine::CombinerWeights;
pub use symmetry::{ArmSymmetryScorer, FaceSymmetryScorer, FrameScorer};
