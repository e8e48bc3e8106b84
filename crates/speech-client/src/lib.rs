//! # Speech client
//!
//! Forwards recorded audio to a hosted speech-to-text API and returns the transcript.
//! The [`Transcriber`] trait is the seam used by the HTTP layer; [`DeepgramClient`]
//! is the production implementation.

mod config;
mod deepgram;
mod error;

pub use config::{
    EnvSpeechConfig, SpeechConfig, DEFAULT_DEEPGRAM_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_MODEL,
};
pub use deepgram::DeepgramClient;
pub use error::TranscriptionError;

use async_trait::async_trait;

/// Content type assumed when the uploaded file does not declare one.
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// Speech-to-text interface.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes `audio`; `content_type` is the uploaded file's MIME type if known.
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, TranscriptionError>;
}
