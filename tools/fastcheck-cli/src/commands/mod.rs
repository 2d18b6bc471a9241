pub mod arm;
pub mod check;
pub mod detect;
pub mod face;
pub mod health;
pub mod screen;
pub mod speech;

use fastcheck_analysis_core::SmoothingStrategy;

/// Map a user-facing smoothing name to the strategy.
pub fn parse_smoothing(name: &str) -> anyhow::Result<SmoothingStrategy> {
    match name {
        "windowed-median" => Ok(SmoothingStrategy::WindowedMedian),
        "decile-trim" => Ok(SmoothingStrategy::DecileTrim),
        other => anyhow::bail!("invalid --smoothing (use windowed-median|decile-trim): {other}"),
    }
}

/// Print a report to stdout as pretty JSON.
pub fn print_report<T: serde::Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
