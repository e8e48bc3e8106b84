//! HTTP surface: axum router over the chat service, history eraser and transcriber.

mod chat_routes;
mod health;
mod voice_routes;

pub use chat_routes::ChatRoutes;
pub use health::HealthRoutes;
pub use voice_routes::VoiceRoutes;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use speech_client::Transcriber;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::{ChatService, HistoryEraser};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

/// Shared handles for all routes. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub eraser: HistoryEraser,
    pub transcriber: Arc<dyn Transcriber>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        chat: Arc<ChatService>,
        eraser: HistoryEraser,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            chat,
            eraser,
            transcriber,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Builds the full router with request tracing, permissive CORS and the upload size limit.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .merge(ChatRoutes::routes(state.clone()))
        .merge(VoiceRoutes::routes(state))
        .merge(HealthRoutes::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
