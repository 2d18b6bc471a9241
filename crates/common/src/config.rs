//! Application configuration.
//!
//! Everything here is sourced from the process environment: screening
//! sessions are request-scoped and carry their own parameters, so the only
//! process-level configuration is logging and the optional SMS provider
//! credentials.

use serde::{Deserialize, Serialize};

/// Global application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// SMS provider credentials, if configured.
    pub sms: Option<SmsCredentials>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "fastcheck=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

/// Credentials for the external SMS delivery provider.
///
/// All three values must be present for the provider to be considered
/// configured; a partial set is treated as unconfigured.
#[derive(Debug, Clone)]
pub struct SmsCredentials {
    /// Provider account identifier.
    pub account_sid: String,

    /// Provider auth token.
    pub auth_token: String,

    /// Sender address (phone number or alphanumeric id).
    pub sender: String,
}

/// Environment variable holding the SMS account identifier.
pub const ENV_SMS_ACCOUNT_SID: &str = "FASTCHECK_SMS_ACCOUNT_SID";
/// Environment variable holding the SMS auth token.
pub const ENV_SMS_AUTH_TOKEN: &str = "FASTCHECK_SMS_AUTH_TOKEN";
/// Environment variable holding the SMS sender address.
pub const ENV_SMS_FROM: &str = "FASTCHECK_SMS_FROM";

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Missing SMS credentials are not an error: notification dispatch
    /// degrades to a skip with a zero-sent outcome.
    pub fn from_env() -> Self {
        Self {
            logging: LoggingConfig::default(),
            sms: SmsCredentials::from_env(),
        }
    }
}

impl SmsCredentials {
    /// Read credentials from the environment, returning `None` unless all
    /// three variables are present and non-empty.
    pub fn from_env() -> Option<Self> {
        let account_sid = non_empty_var(ENV_SMS_ACCOUNT_SID);
        let auth_token = non_empty_var(ENV_SMS_AUTH_TOKEN);
        let sender = non_empty_var(ENV_SMS_FROM);

        match (account_sid, auth_token, sender) {
            (Some(account_sid), Some(auth_token), Some(sender)) => Some(Self {
                account_sid,
                auth_token,
                sender,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "Partial SMS credentials in environment; notifications disabled. \
                     Set {ENV_SMS_ACCOUNT_SID}, {ENV_SMS_AUTH_TOKEN} and {ENV_SMS_FROM}."
                );
                None
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_level_is_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }
}
