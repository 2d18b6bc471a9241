//! Temporal aggregation of per-frame scores.
//!
//! A finished session hands its score series to one smoothing strategy,
//! which produces summary statistics. Both strategies are explicit,
//! selectable policies: windowed-median denoises single-frame detector
//! jitter without discarding samples; decile-trim removes outlier frames
//! (a momentary occlusion) without a per-frame smoothing pass.

use fastcheck_screening_model::Modality;

/// A valid per-frame symmetry score within a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryScore {
    /// Zero-based index of the frame within the session's active phase.
    pub frame_index: usize,

    /// Symmetry score [0.0, 1.0], 1.0 = perfectly symmetric.
    pub value: f64,
}

/// The ordered score series for one capture session.
///
/// Append-only during capture and owned by exactly one session; aggregation
/// happens only after the frame stream is exhausted.
#[derive(Debug, Clone)]
pub struct ScoreSeries {
    modality: Modality,
    scores: Vec<SymmetryScore>,
    frames_seen: usize,
    detected_frames: usize,
}

impl ScoreSeries {
    /// Create an empty series for one modality.
    pub fn new(modality: Modality) -> Self {
        Self {
            modality,
            scores: Vec::new(),
            frames_seen: 0,
            detected_frames: 0,
        }
    }

    /// Record one frame's outcome.
    ///
    /// `detected` is whether the detector found a subject at all; `score` is
    /// the scorer's output (`None` = undetermined, the frame is skipped).
    pub fn record(&mut self, detected: bool, score: Option<f64>) {
        let frame_index = self.frames_seen;
        self.frames_seen += 1;
        if detected {
            self.detected_frames += 1;
        }
        if let Some(value) = score {
            debug_assert!((0.0..=1.0).contains(&value));
            self.scores.push(SymmetryScore { frame_index, value });
        }
    }

    /// The modality this series belongs to.
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Valid scores in arrival order.
    pub fn scores(&self) -> &[SymmetryScore] {
        &self.scores
    }

    /// Valid score values in arrival order.
    pub fn values(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.value).collect()
    }

    /// Total frames offered during the active phase.
    pub fn frames_seen(&self) -> usize {
        self.frames_seen
    }

    /// Frames in which the detector found a subject, including frames later
    /// excluded as undetermined.
    pub fn detected_frames(&self) -> usize {
        self.detected_frames
    }

    /// Number of valid scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the session produced no valid scores at all.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Selectable smoothing policy for session aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingStrategy {
    /// Replace each score with the median of its radius-2, boundary-clipped
    /// window, then aggregate. Applies only for N > 5.
    WindowedMedian,

    /// Sort ascending, drop `floor(N/10)` samples from each end, aggregate
    /// the remainder. Applies only for N > 10.
    DecileTrim,
}

/// Summary statistics over a smoothed score series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,

    /// Samples that contributed to the statistics (after trimming).
    pub sample_count: usize,

    /// Samples removed by the strategy (0 for windowed-median).
    pub trimmed_count: usize,
}

/// Aggregate a finished series of score values under one strategy.
///
/// Returns `None` for an empty series; callers map that to the sentinel
/// no-detection report.
pub fn aggregate(values: &[f64], strategy: SmoothingStrategy) -> Option<AggregateResult> {
    if values.is_empty() {
        return None;
    }

    match strategy {
        SmoothingStrategy::WindowedMedian => {
            let smoothed = if values.len() > 5 {
                windowed_median(values)
            } else {
                values.to_vec()
            };
            Some(stats(&smoothed, 0))
        }
        SmoothingStrategy::DecileTrim => {
            if values.len() > 10 {
                let (trimmed, trimmed_count) = decile_trim(values);
                Some(stats(&trimmed, trimmed_count))
            } else {
                Some(stats(values, 0))
            }
        }
    }
}

/// Per-index median over the boundary-clipped window `[i-2, i+3)`.
pub fn windowed_median(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    (0..n)
        .map(|i| {
            let start = i.saturating_sub(2);
            let end = (i + 3).min(n);
            median(&values[start..end])
        })
        .collect()
}

/// Sorted copy with `floor(N/10)` samples removed from each end.
///
/// Returns the remainder and the total number of samples removed. The gate
/// (N > 10) lives in [`aggregate`]; at exactly N = 10 nothing is trimmed.
pub fn decile_trim(values: &[f64]) -> (Vec<f64>, usize) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let per_side = sorted.len() / 10;
    if per_side == 0 {
        return (sorted, 0);
    }
    let kept = sorted[per_side..sorted.len() - per_side].to_vec();
    (kept, per_side * 2)
}

fn stats(values: &[f64], trimmed_count: usize) -> AggregateResult {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    AggregateResult {
        mean,
        median: median(values),
        stddev: variance.sqrt(),
        sample_count: values.len(),
        trimmed_count,
    }
}

/// Median of a non-empty slice; even lengths average the two middle values.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_aggregates_to_none() {
        assert_eq!(aggregate(&[], SmoothingStrategy::WindowedMedian), None);
        assert_eq!(aggregate(&[], SmoothingStrategy::DecileTrim), None);
    }

    #[test]
    fn test_windowed_median_matches_running_median_on_monotonic_series() {
        // 7-element monotonic series; the window shrinks to 3/4 elements at
        // the boundaries.
        let values = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let smoothed = windowed_median(&values);
        let expected = [
            median(&values[0..3]), // [0, 3)
            median(&values[0..4]), // [0, 4)
            median(&values[0..5]), // [0, 5)
            median(&values[1..6]), // [1, 6)
            median(&values[2..7]), // [2, 7)
            median(&values[3..7]), // [3, 7)
            median(&values[4..7]), // [4, 7)
        ];
        assert_eq!(smoothed.len(), expected.len());
        for (got, want) in smoothed.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_windowed_median_suppresses_single_frame_spike() {
        let values = [0.9, 0.9, 0.1, 0.9, 0.9, 0.9, 0.9];
        let result = aggregate(&values, SmoothingStrategy::WindowedMedian).unwrap();
        assert!((result.mean - 0.9).abs() < 1e-12);
        assert_eq!(result.trimmed_count, 0);
        assert_eq!(result.sample_count, 7);
    }

    #[test]
    fn test_windowed_median_below_gate_uses_raw_series() {
        // N = 5 is at the gate; the spike survives into the mean.
        let values = [0.9, 0.9, 0.1, 0.9, 0.9];
        let result = aggregate(&values, SmoothingStrategy::WindowedMedian).unwrap();
        assert!((result.mean - 0.74).abs() < 1e-12);
    }

    #[test]
    fn test_decile_trim_eleven_removes_one_per_side() {
        let values: Vec<f64> = (0..11).map(|i| i as f64 / 10.0).collect();
        let (kept, trimmed) = decile_trim(&values);
        assert_eq!(trimmed, 2);
        assert_eq!(kept.len(), 9);
        assert!((kept[0] - 0.1).abs() < 1e-12);
        assert!((kept[8] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_decile_trim_gate_excludes_exactly_ten() {
        // At N = 10 the strategy gate (N > 10) keeps the raw series.
        let values: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
        let result = aggregate(&values, SmoothingStrategy::DecileTrim).unwrap();
        assert_eq!(result.trimmed_count, 0);
        assert_eq!(result.sample_count, 10);
    }

    #[test]
    fn test_decile_trim_drops_outliers_from_stats() {
        let mut values = vec![0.8; 18];
        values.push(0.0); // occlusion dip
        values.push(1.0); // glint spike
        let result = aggregate(&values, SmoothingStrategy::DecileTrim).unwrap();
        assert_eq!(result.trimmed_count, 4);
        assert_eq!(result.sample_count, 16);
        assert!((result.mean - 0.8).abs() < 1e-12);
        assert!(result.stddev.abs() < 1e-12);
    }

    #[test]
    fn test_stats_on_constant_series() {
        let result = aggregate(&[0.6; 8], SmoothingStrategy::WindowedMedian).unwrap();
        assert!((result.mean - 0.6).abs() < 1e-12);
        assert!((result.median - 0.6).abs() < 1e-12);
        assert!(result.stddev.abs() < 1e-12);
    }

    #[test]
    fn test_median_even_length_averages_middle_pair() {
        assert!((median(&[0.1, 0.2, 0.3, 0.4]) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_series_records_detection_and_undetermined_frames() {
        let mut series = ScoreSeries::new(Modality::Arm);
        series.record(true, Some(0.9));
        series.record(true, None); // below visibility floor
        series.record(false, None); // no pose at all
        series.record(true, Some(0.8));

        assert_eq!(series.frames_seen(), 4);
        assert_eq!(series.detected_frames(), 3);
        assert_eq!(series.len(), 2);
        assert_eq!(series.scores()[1].frame_index, 3);
    }
}
