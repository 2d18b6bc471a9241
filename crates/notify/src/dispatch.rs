//! Best-effort alert fan-out.

use fastcheck_screening_model::NotificationOutcome;

use crate::provider::SmsProvider;

/// Send `message` to every non-blank contact, in the order supplied.
///
/// Individual delivery failures are recorded and the loop continues; every
/// contact is tallied exactly once. With no provider configured the whole
/// dispatch is skipped and the outcome reports zero sent.
pub fn dispatch_alert(
    provider: Option<&dyn SmsProvider>,
    contacts: &[String],
    message: &str,
) -> NotificationOutcome {
    let targets: Vec<&str> = contacts
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    let Some(provider) = provider else {
        tracing::warn!(
            contacts = targets.len(),
            "No SMS provider configured; skipping alert dispatch"
        );
        return NotificationOutcome {
            notifications_sent: 0,
            failed_contacts: 0,
            total_contacts: targets.len(),
        };
    };

    let mut sent = 0usize;
    let mut failed = 0usize;
    for contact in &targets {
        match provider.send(contact, message) {
            Ok(()) => {
                sent += 1;
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(error = %e, "Failed to deliver alert to contact");
            }
        }
    }

    tracing::info!(sent, failed, total = targets.len(), "Alert dispatch finished");

    NotificationOutcome {
        notifications_sent: sent,
        failed_contacts: failed,
        total_contacts: targets.len(),
    }
}
