//! Voice transcription proxy route.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use speech_client::TranscriptionError;
use tracing::{info, warn};

use super::AppState;
use crate::core::AppError;

/// Multipart field carrying the recording.
const FILE_FIELD: &str = "file";

struct UploadedAudio {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

/// Voice routes handler
pub struct VoiceRoutes;

impl VoiceRoutes {
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route("/voice/transcribe", post(Self::transcribe))
            .with_state(state)
    }

    async fn transcribe(
        State(state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<Value>, AppError> {
        let multipart = multipart.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Rejected transcription upload");
            TranscriptionError::MissingFile
        })?;
        let audio = Self::read_file_field(multipart)
            .await?
            .ok_or(TranscriptionError::MissingFile)?;

        info!(
            audio_len = audio.bytes.len(),
            content_type = ?audio.content_type,
            "Transcribing uploaded audio"
        );
        let transcript = state
            .transcriber
            .transcribe(audio.bytes, audio.content_type.as_deref())
            .await?;
        Ok(Json(json!({ "transcript": transcript })))
    }

    /// Returns the first `file` field; other fields are skipped.
    async fn read_file_field(
        mut multipart: Multipart,
    ) -> Result<Option<UploadedAudio>, AppError> {
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => return Ok(None),
                Err(e) => {
                    warn!(error = %e, "Malformed multipart body");
                    return Ok(None);
                }
            };
            if field.name() != Some(FILE_FIELD) {
                continue;
            }
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(format!("Failed to read uploaded file: {e}")))?;
            return Ok(Some(UploadedAudio {
                bytes: bytes.to_vec(),
                content_type,
            }));
        }
    }
}
