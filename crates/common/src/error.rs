//! Error types shared across Fastcheck crates.

use std::path::PathBuf;

/// Top-level error type for Fastcheck operations.
#[derive(Debug, thiserror::Error)]
pub enum FastcheckError {
    #[error("Acquisition error: {message}")]
    Acquisition { message: String },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Notification error: {message}")]
    Notify { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FastcheckError.
pub type FastcheckResult<T> = Result<T, FastcheckError>;

impl FastcheckError {
    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::Acquisition {
            message: msg.into(),
        }
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: msg.into(),
        }
    }

    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis {
            message: msg.into(),
        }
    }

    pub fn notify(msg: impl Into<String>) -> Self {
        Self::Notify {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }

    /// Whether this error should be reported to the caller as a client
    /// mistake rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FastcheckError::MalformedInput { .. } | FastcheckError::FileNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let err = FastcheckError::acquisition("camera unavailable");
        assert_eq!(err.to_string(), "Acquisition error: camera unavailable");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(FastcheckError::malformed_input("bad extension").is_client_error());
        assert!(!FastcheckError::analysis("nan score").is_client_error());
    }
}
