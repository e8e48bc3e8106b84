//! History assembler: the store's newest-first page turned into chronological model context.

use prompt::ChatMessage;
use std::sync::Arc;
use storage::{ChatTurn, MessageStore, StorageError, TurnRole};
use tracing::debug;

/// Number of most recent turns sent as context. A hard count, not a token budget.
pub const HISTORY_WINDOW: i64 = 20;

pub fn turn_to_message(turn: &ChatTurn) -> ChatMessage {
    match turn.role {
        TurnRole::User => ChatMessage::user(turn.content.clone()),
        TurnRole::Assistant => ChatMessage::assistant(turn.content.clone()),
    }
}

#[derive(Clone)]
pub struct HistoryAssembler {
    store: Arc<dyn MessageStore>,
    window: i64,
}

impl HistoryAssembler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self::with_window(store, HISTORY_WINDOW)
    }

    pub fn with_window(store: Arc<dyn MessageStore>, window: i64) -> Self {
        Self { store, window }
    }

    pub fn window(&self) -> i64 {
        self.window
    }

    /// Most recent `window` turns of the session, oldest first.
    pub async fn assemble(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        let mut turns = self.store.recent(session_id, self.window).await?;
        turns.reverse();
        debug!(
            session_id = %session_id,
            turn_count = turns.len(),
            window = self.window,
            "Assembled conversation history"
        );
        Ok(turns.iter().map(turn_to_message).collect())
    }
}
