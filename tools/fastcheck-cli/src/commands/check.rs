//! Check configuration and environment.

use fastcheck_analysis_core::{CombinerWeights, ThresholdTable};
use fastcheck_common::config::{AppConfig, ENV_SMS_ACCOUNT_SID, ENV_SMS_AUTH_TOKEN, ENV_SMS_FROM};

pub fn run() -> anyhow::Result<()> {
    println!("Fastcheck Configuration Check");
    println!("{}", "=".repeat(50));

    let thresholds = ThresholdTable::default();
    println!("[OK] Face threshold: {}", thresholds.face);
    println!("[OK] Arm threshold: {}", thresholds.arm);

    let weights = CombinerWeights::default();
    println!(
        "[OK] Combiner weights: face={} arm={} speech={} (alert > {})",
        weights.face, weights.arm, weights.speech, weights.alert_threshold
    );

    let config = AppConfig::from_env();
    println!("[OK] Log level: {}", config.logging.level);

    match config.sms {
        Some(creds) => {
            println!("[OK] SMS provider configured (sender: {})", creds.sender);
        }
        None => {
            println!("[WARN] SMS provider not configured; alerts will be skipped.");
            println!("       Set {ENV_SMS_ACCOUNT_SID}, {ENV_SMS_AUTH_TOKEN} and {ENV_SMS_FROM}.");
        }
    }

    println!();
    println!("fastcheck {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
