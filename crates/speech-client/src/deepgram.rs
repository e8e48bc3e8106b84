//! Deepgram pre-recorded transcription client.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::config::SpeechConfig;
use crate::error::TranscriptionError;
use crate::{Transcriber, DEFAULT_AUDIO_CONTENT_TYPE};

#[derive(Debug, Default, Deserialize)]
struct ListenResponse {
    #[serde(default)]
    results: Option<ListenResults>,
}

#[derive(Debug, Default, Deserialize)]
struct ListenResults {
    #[serde(default)]
    channels: Vec<Channel>,
}

#[derive(Debug, Default, Deserialize)]
struct Channel {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Default, Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
}

impl ListenResponse {
    /// First alternative of the first channel; empty when Deepgram heard nothing.
    fn into_transcript(self) -> String {
        self.results
            .and_then(|r| r.channels.into_iter().next())
            .and_then(|c| c.alternatives.into_iter().next())
            .map(|a| a.transcript)
            .unwrap_or_default()
    }
}

/// Deepgram `/v1/listen` client with smart formatting enabled.
#[derive(Clone)]
pub struct DeepgramClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    language: String,
}

impl DeepgramClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &dyn SpeechConfig) -> Self {
        Self::new(
            config.api_key().map(str::to_string),
            config.base_url(),
            config.model(),
            config.language(),
        )
    }

    fn listen_url(&self) -> String {
        format!("{}/v1/listen", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Transcriber for DeepgramClient {
    #[instrument(skip(self, audio), fields(audio_len = audio.len(), model = %self.model))]
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranscriptionError::MissingApiKey)?;
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE);

        let response = self
            .http
            .post(self.listen_url())
            .query(&[
                ("model", self.model.as_str()),
                ("smart_format", "true"),
                ("language", self.language.as_str()),
            ])
            .header(AUTHORIZATION, format!("Token {api_key}"))
            .header(CONTENT_TYPE, content_type)
            .body(audio)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Deepgram Error");
            return Err(TranscriptionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ListenResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;
        let transcript = parsed.into_transcript();
        info!(transcript_len = transcript.len(), "Deepgram transcription completed");
        Ok(transcript)
    }
}
