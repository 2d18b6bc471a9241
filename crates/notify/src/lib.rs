//! Fastcheck Notifications
//!
//! Best-effort alert fan-out for positive assessments:
//! - **Alert message:** Deterministic text built from the combined assessment
//! - **Provider seam:** The actual SMS delivery mechanism stays external,
//!   consumed through the [`provider::SmsProvider`] trait
//! - **Dispatch:** Per-contact tally that survives individual failures

pub mod alert;
pub mod dispatch;
pub mod provider;

pub use alert::*;
pub use dispatch::*;
pub use provider::*;
