//! Turn lifecycle: persist user turn → load history → build prompt → complete → persist reply.

use llm_client::LlmClient;
use prompt::SystemPromptBuilder;
use std::fmt;
use std::sync::Arc;
use storage::{MessageStore, TurnRole};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::history::HistoryAssembler;
use super::types::{ChatReply, ChatRequest};
use crate::core::AppError;

/// Prefix of the in-band error shown to the visitor when an exchange fails.
pub const APOLOGY_PREFIX: &str = "抱歉，我暂时无法回答您的问题，请稍后再试。错误: ";

/// States of one chat exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Received,
    UserPersisted,
    HistoryLoaded,
    PromptBuilt,
    CompletionRequested,
    Completed,
    Failed,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnState::Received => "received",
            TurnState::UserPersisted => "user_persisted",
            TurnState::HistoryLoaded => "history_loaded",
            TurnState::PromptBuilt => "prompt_built",
            TurnState::CompletionRequested => "completion_requested",
            TurnState::Completed => "completed",
            TurnState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs chat exchanges. Holds no per-session state; concurrent exchanges of one
/// session are not serialized.
pub struct ChatService {
    store: Arc<dyn MessageStore>,
    history: HistoryAssembler,
    prompt_builder: SystemPromptBuilder,
    llm: Arc<dyn LlmClient>,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn MessageStore>,
        prompt_builder: SystemPromptBuilder,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            history: HistoryAssembler::new(store.clone()),
            store,
            prompt_builder,
            llm,
        }
    }

    pub fn with_history(mut self, history: HistoryAssembler) -> Self {
        self.history = history;
        self
    }

    /// Handles one exchange. Never fails: errors come back as `success: false`.
    #[instrument(skip(self, request), fields(session_id = tracing::field::Empty))]
    pub async fn handle(&self, request: ChatRequest) -> ChatReply {
        let session_id = match request.session_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                info!(session_id = %id, "Issued new session id");
                id
            }
        };
        tracing::Span::current().record("session_id", session_id.as_str());
        debug!(state = %TurnState::Received, message_len = request.message.len(), "Chat turn");

        match self.run_turn(&session_id, &request.message).await {
            Ok(reply) => {
                debug!(state = %TurnState::Completed, "Chat turn");
                ChatReply::completed(reply, session_id)
            }
            Err(e) => {
                error!(state = %TurnState::Failed, error = %e, "Chat turn failed");
                ChatReply::failed(format!("{APOLOGY_PREFIX}{e}"), Some(session_id))
            }
        }
    }

    async fn run_turn(&self, session_id: &str, message: &str) -> Result<String, AppError> {
        self.store.append(session_id, TurnRole::User, message).await?;
        debug!(state = %TurnState::UserPersisted, "Chat turn");

        let history = self.history.assemble(session_id).await?;
        debug!(state = %TurnState::HistoryLoaded, history_len = history.len(), "Chat turn");

        // Knowledge documents are read from disk on every turn.
        let prompt_builder = self.prompt_builder.clone();
        let build = move || prompt_builder.build();
        let system_prompt = tokio::task::spawn_blocking(build).await?;
        debug!(state = %TurnState::PromptBuilt, prompt_len = system_prompt.len(), "Chat turn");

        debug!(state = %TurnState::CompletionRequested, "Chat turn");
        let reply = self.llm.complete(&system_prompt, &history, message).await?;

        // Reply is returned even when this write fails.
        if let Err(e) = self
            .store
            .append(session_id, TurnRole::Assistant, &reply)
            .await
        {
            warn!(error = %e, "Failed to persist assistant turn");
        }

        Ok(reply)
    }
}
