//! Screening session management.
//!
//! A session drives one landmark source through one scorer for one bounded
//! capture. The session window has two wall-clock-equivalent phases keyed
//! off frame timestamps: a warm-up interval whose frames are discarded
//! (subject positioning, camera stabilization) and an active interval
//! bounded by the total duration. The loop ends at whichever comes first:
//! the duration, the end of the stream, or the cancel token firing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fastcheck_analysis_core::aggregate::ScoreSeries;
use fastcheck_analysis_core::symmetry::FrameScorer;
use fastcheck_common::clock::CaptureClock;
use fastcheck_common::error::FastcheckResult;
use fastcheck_screening_model::Modality;

use crate::source::LandmarkSource;

/// The timing window of a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    /// Frames with timestamps inside the warm-up are discarded unscored.
    pub warmup: Duration,

    /// Frames with timestamps beyond the duration end the session.
    pub duration: Duration,
}

impl SessionWindow {
    /// Face screening window: 1 s warm-up, 5 s total.
    pub fn face() -> Self {
        Self {
            warmup: Duration::from_secs(1),
            duration: Duration::from_secs(5),
        }
    }

    /// Arm screening window: 2 s warm-up, 15 s total.
    pub fn arm() -> Self {
        Self {
            warmup: Duration::from_secs(2),
            duration: Duration::from_secs(15),
        }
    }

    /// Default window for a modality. Speech has no capture window.
    pub fn for_modality(modality: Modality) -> Option<Self> {
        match modality {
            Modality::Face => Some(Self::face()),
            Modality::Arm => Some(Self::arm()),
            Modality::Speech => None,
        }
    }

    /// Window that accepts every frame (no warm-up, effectively unbounded).
    pub fn unbounded() -> Self {
        Self {
            warmup: Duration::ZERO,
            duration: Duration::MAX,
        }
    }
}

/// Shared flag allowing a caller to abort a session before its deadline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the session stops at the next frame boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// State of a screening session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created but not started.
    Idle,
    /// Frames are being consumed.
    Scoring,
    /// The window elapsed or the stream ended.
    Finished,
    /// The cancel token fired before the window elapsed.
    Cancelled,
}

/// A screening session that owns its score series.
///
/// One session per capture, one series per session; nothing is shared
/// across requests.
pub struct ScreeningSession<S: FrameScorer> {
    scorer: S,
    window: SessionWindow,
    cancel: CancelToken,
    state: SessionState,
}

impl<S: FrameScorer> ScreeningSession<S> {
    /// Create a session for one scorer and window.
    pub fn new(scorer: S, window: SessionWindow) -> Self {
        Self {
            scorer,
            window,
            cancel: CancelToken::new(),
            state: SessionState::Idle,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// A token that aborts this session when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the session to completion on the current thread.
    ///
    /// Blocks on `source.next_frame()`; callers that must stay responsive
    /// should use [`run_session`] instead.
    pub fn run_blocking(
        mut self,
        source: &mut dyn LandmarkSource,
    ) -> FastcheckResult<ScoreSeries> {
        let modality = self.scorer.modality();
        let warmup_secs = self.window.warmup.as_secs_f64();
        let duration_secs = self.window.duration.as_secs_f64();
        let clock = CaptureClock::start();

        tracing::info!(
            %modality,
            warmup_secs,
            duration_secs,
            epoch_wall = %clock.epoch_wall(),
            "Starting screening session"
        );

        self.state = SessionState::Scoring;
        let mut series = ScoreSeries::new(modality);
        let mut skipped_warmup = 0usize;

        while let Some(frame) = source.next_frame()? {
            if self.cancel.is_cancelled() {
                self.state = SessionState::Cancelled;
                break;
            }

            let elapsed = frame.timestamp_secs();
            if elapsed > duration_secs {
                break;
            }
            if elapsed < warmup_secs {
                skipped_warmup += 1;
                continue;
            }

            series.record(self.scorer.detects(&frame), self.scorer.score(&frame));
        }

        if self.state != SessionState::Cancelled {
            self.state = SessionState::Finished;
        }

        tracing::info!(
            %modality,
            state = ?self.state,
            frames_seen = series.frames_seen(),
            detected_frames = series.detected_frames(),
            valid_scores = series.len(),
            skipped_warmup,
            wall_secs = clock.elapsed_secs(),
            "Screening session ended"
        );

        Ok(series)
    }
}

/// Run a session on a dedicated blocking worker.
///
/// Live capture blocks until a frame is available or the source ends, so
/// the session must never run on a thread that has to stay responsive.
pub async fn run_session<S>(
    session: ScreeningSession<S>,
    mut source: Box<dyn LandmarkSource>,
) -> FastcheckResult<ScoreSeries>
where
    S: FrameScorer + Send + 'static,
{
    tokio::task::spawn_blocking(move || session.run_blocking(source.as_mut()))
        .await
        .map_err(|e| anyhow::anyhow!("session worker panicked: {e}"))?
}
