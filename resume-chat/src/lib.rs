//! # Resume chat backend
//!
//! Serves the resume site's chat widget: one chat exchange per `POST /chat`, conversation
//! reset via `DELETE /chat/history/{sessionId}`, and a voice transcription proxy.
//! Wires storage, prompt, llm-client and speech-client behind an axum router.

pub mod chat;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod runner;
pub mod server;

pub use chat::{
    ChatReply, ChatRequest, ChatService, HistoryAssembler, HistoryEraser, TurnState,
    APOLOGY_PREFIX, HISTORY_WINDOW,
};
pub use cli::{load_config, Cli, Commands};
pub use components::{build_components, build_store, AppComponents};
pub use config::{AppConfig, AppExtensions, BaseAppExtensions, BaseConfig};
pub use crate::core::{init_tracing, AppError, Result};
pub use runner::{clear_history, run_server};
pub use server::{build_router, AppState};
