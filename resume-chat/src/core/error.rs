//! Application error: aggregates the per-crate errors and maps them onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use llm_client::CompletionError;
use serde_json::json;
use speech_client::TranscriptionError;
use storage::StorageError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),

    #[error("{0}")]
    Upload(String),

    #[error("System prompt build failed: {0}")]
    Prompt(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transcription(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message put in the `error` field of the response body.
    ///
    /// Storage and internal failures are not echoed to clients.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Transcription(e) => e.to_string(),
            AppError::Completion(e) => e.to_string(),
            AppError::Upload(msg) => msg.clone(),
            AppError::Storage(_) | AppError::Prompt(_) => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_bad_request() {
        let err = AppError::from(TranscriptionError::MissingFile);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "No file provided");
    }

    #[test]
    fn storage_error_is_hidden() {
        let err = AppError::from(StorageError::Database("disk I/O error".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal Server Error");
        assert_eq!(err.to_string(), "Database error: disk I/O error");
    }

    #[tokio::test]
    async fn prompt_task_failure_is_hidden() {
        let join_error = tokio::task::spawn_blocking(|| panic!("knowledge read panicked"))
            .await
            .unwrap_err();
        let err = AppError::from(join_error);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal Server Error");
        assert!(err.to_string().starts_with("System prompt build failed"));
    }

    #[test]
    fn completion_error_is_transparent() {
        let err = AppError::from(CompletionError::Api("upstream timeout".to_string()));
        assert_eq!(err.to_string(), "upstream timeout");
    }
}
