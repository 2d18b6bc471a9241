//! Combine per-modality verdicts and dispatch alerts.

use fastcheck_analysis_core::combine::CombinerWeights;
use fastcheck_analysis_core::screening::assess;
use fastcheck_common::config::SmsCredentials;
use fastcheck_notify::{build_alert_message, dispatch_alert, LogOnlyProvider, SmsProvider};

use super::print_report;

pub fn run(face: bool, arm: bool, speech: bool, contacts: Vec<String>) -> anyhow::Result<()> {
    let speech_impairment = if speech { 1.0 } else { 0.0 };
    let mut assessment = assess(face, arm, speech_impairment, &CombinerWeights::default());

    tracing::info!(
        face,
        arm,
        speech,
        combined_score = assessment.combined_score,
        detected = assessment.stroke_detected,
        "Combined assessment"
    );

    if assessment.stroke_detected && !contacts.is_empty() {
        let provider = SmsCredentials::from_env().map(|creds| LogOnlyProvider::new(&creds));
        let message = build_alert_message(&assessment);
        let outcome = dispatch_alert(
            provider.as_ref().map(|p| p as &dyn SmsProvider),
            &contacts,
            &message,
        );
        assessment.notifications = Some(outcome);
    }

    print_report(&assessment)
}
