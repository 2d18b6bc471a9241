//! Speech analysis (stub).

use std::path::PathBuf;

use fastcheck_analysis_core::screening::speech_report;
use fastcheck_common::error::FastcheckError;

use super::print_report;

const ALLOWED_AUDIO_EXTENSIONS: [&str; 4] = ["wav", "mp3", "ogg", "flac"];

pub fn run(audio_path: PathBuf) -> anyhow::Result<()> {
    let extension = audio_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let allowed = extension
        .as_deref()
        .is_some_and(|e| ALLOWED_AUDIO_EXTENSIONS.contains(&e));
    if !allowed {
        return Err(FastcheckError::malformed_input(format!(
            "unsupported audio file type: {} (expected wav|mp3|ogg|flac)",
            audio_path.display()
        ))
        .into());
    }
    if !audio_path.exists() {
        return Err(FastcheckError::FileNotFound { path: audio_path }.into());
    }

    tracing::warn!("Speech analysis is not implemented; returning fixed negative result");
    print_report(&speech_report())
}
