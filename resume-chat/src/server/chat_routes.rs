//! Chat routes: one exchange per POST, history reset per DELETE.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::warn;

use super::AppState;
use crate::chat::{ChatReply, ChatRequest, APOLOGY_PREFIX};
use crate::core::AppError;

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route("/chat", post(Self::send_message))
            .route("/chat/history/:session_id", delete(Self::clear_history))
            .with_state(state)
    }

    /// Always answers 200; a malformed body is reported in-band like any other failure.
    async fn send_message(
        State(state): State<AppState>,
        payload: Result<Json<ChatRequest>, JsonRejection>,
    ) -> Json<ChatReply> {
        match payload {
            Ok(Json(request)) => Json(state.chat.handle(request).await),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "Rejected chat request body");
                Json(ChatReply::failed(
                    format!("{APOLOGY_PREFIX}{}", rejection.body_text()),
                    None,
                ))
            }
        }
    }

    async fn clear_history(
        State(state): State<AppState>,
        Path(session_id): Path<String>,
    ) -> Result<Json<Value>, AppError> {
        state.eraser.erase(&session_id).await?;
        Ok(Json(json!({ "success": true })))
    }
}
