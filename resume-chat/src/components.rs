//! Component factory: builds the store, clients and AppState from config. Isolates assembly from the runner.

use anyhow::Result;
use llm_client::{LlmClient, OpenAILlmClient};
use prompt::{Persona, SystemPromptBuilder};
use speech_client::{DeepgramClient, Transcriber};
use std::sync::Arc;
use storage::{ChatTurnRepository, MessageStore};
use tracing::{error, info, instrument};

use crate::chat::{ChatService, HistoryEraser};
use crate::config::{AppConfig, AppExtensions, BaseConfig};
use crate::server::AppState;

/// Everything the server needs, produced by the component factory.
pub struct AppComponents {
    pub repo: Arc<ChatTurnRepository>,
    pub state: AppState,
}

/// Opens the chat turn database named by `DATABASE_URL`.
#[instrument(skip(config))]
pub async fn build_store(config: &BaseConfig) -> Result<Arc<ChatTurnRepository>> {
    let repo = ChatTurnRepository::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url,
                "Failed to initialize chat storage"
            );
            anyhow::anyhow!("Failed to initialize chat storage: {}", e)
        })?;
    info!(database_url = %config.database_url, "Chat storage ready");
    Ok(Arc::new(repo))
}

/// Builds AppComponents from config: store, LLM client, transcriber, chat service.
#[instrument(skip(config))]
pub async fn build_components(config: &AppConfig) -> Result<AppComponents> {
    let repo = build_store(config.base()).await?;
    let store: Arc<dyn MessageStore> = repo.clone();

    let llm_config = config.extensions().llm_config();
    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(llm_config));
    info!(
        model = %llm_config.model(),
        base_url = %llm_config.base_url(),
        "LLM client ready"
    );

    let speech_config = config.extensions().speech_config();
    if speech_config.api_key().is_none() {
        info!("DEEPGRAM_API_KEY not set; /voice/transcribe will answer 500");
    }
    let transcriber: Arc<dyn Transcriber> = Arc::new(DeepgramClient::from_config(speech_config));

    let prompt_builder = SystemPromptBuilder::new(
        Persona::new(config.base().owner_name.clone()),
        config.knowledge_dir(),
    );
    info!(knowledge_dir = %config.knowledge_dir(), "System prompt builder ready");

    let chat = Arc::new(ChatService::new(store.clone(), prompt_builder, llm_client));
    let state = AppState::new(chat, HistoryEraser::new(store), transcriber)
        .with_max_upload_bytes(config.base().max_upload_bytes);

    Ok(AppComponents { repo, state })
}
