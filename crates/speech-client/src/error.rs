//! Transcription error types.

use thiserror::Error;

/// Errors of the voice transcription proxy.
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("No file provided")]
    MissingFile,
    #[error("DEEPGRAM_API_KEY not found")]
    MissingApiKey,
    #[error("Deepgram API failed: {status} {body}")]
    Upstream { status: u16, body: String },
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TranscriptionError {
    /// HTTP status the proxy answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            TranscriptionError::MissingFile => 400,
            _ => 500,
        }
    }
}
