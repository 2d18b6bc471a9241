//! SMS provider seam.
//!
//! Delivery itself is an external capability; the core only requires a
//! `send` that reports success or failure per contact and never panics.

use fastcheck_common::config::SmsCredentials;
use fastcheck_common::error::FastcheckResult;

/// A provider capable of delivering one message to one contact.
pub trait SmsProvider: Send + Sync {
    /// Deliver `body` to `to`. An error means this contact was not reached;
    /// dispatch continues with the remaining contacts.
    fn send(&self, to: &str, body: &str) -> FastcheckResult<()>;
}

/// Provider used when credentials are configured but no delivery backend is
/// wired into this process: logs each send and reports success.
///
/// Real deployments supply their own [`SmsProvider`] implementation; this
/// one exists so the CLI path exercises the full dispatch tally.
#[derive(Debug, Clone)]
pub struct LogOnlyProvider {
    sender: String,
}

impl LogOnlyProvider {
    pub fn new(credentials: &SmsCredentials) -> Self {
        Self {
            sender: credentials.sender.clone(),
        }
    }
}

impl SmsProvider for LogOnlyProvider {
    fn send(&self, to: &str, body: &str) -> FastcheckResult<()> {
        tracing::info!(
            from = %self.sender,
            to = %redact_contact(to),
            bytes = body.len(),
            "Alert dispatched (log-only provider)"
        );
        Ok(())
    }
}

/// Keep only the last few digits of a contact id for log output.
fn redact_contact(contact: &str) -> String {
    let visible = 4usize;
    let chars: Vec<char> = contact.chars().collect();
    if chars.len() <= visible {
        return "*".repeat(chars.len());
    }
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{}", "*".repeat(hidden), tail)
}
