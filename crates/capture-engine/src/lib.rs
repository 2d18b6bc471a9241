//! Fastcheck Capture Engine
//!
//! Orchestrates one screening session over a stream of landmark frames.
//! The engine owns the session window (warm-up and total duration), the
//! cancellation token, and the score series; frame acquisition and landmark
//! detection stay behind the [`source::LandmarkSource`] seam.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ScreeningSession                 │
//! │  ┌────────────────┐   ┌───────────────────┐  │
//! │  │ LandmarkSource │──▶│ FrameScorer       │  │
//! │  │ (blocking)     │   │ (face | arm)      │  │
//! │  └────────────────┘   └─────────┬─────────┘  │
//! │        warm-up / duration gate  │             │
//! │        cancel token             ▼             │
//! │                        ┌────────────────┐     │
//! │                        │  ScoreSeries   │     │
//! │                        └────────────────┘     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod session;
pub mod source;

pub use session::*;
pub use source::*;
