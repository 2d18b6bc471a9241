//! Fastcheck Screening Model
//!
//! Defines the core data contracts for Fastcheck screenings:
//! - **Landmarks:** Normalized anatomical reference points from the external
//!   face-mesh and body-pose detectors
//! - **Frames:** Timestamped per-frame detector output (JSONL on disk)
//! - **Modalities:** The independent screening channels (face, arm, speech)
//! - **Reports:** Per-modality results and the combined assessment
//!
//! All coordinates are normalized to `[0.0, 1.0]` range relative to the
//! capture frame so the analysis is independent of camera resolution.

pub mod frame;
pub mod landmark;
pub mod modality;
pub mod report;

pub use frame::*;
pub use landmark::*;
pub use modality::*;
pub use report::*;
