//! History eraser: drops every turn of a session.

use std::sync::Arc;
use storage::{MessageStore, StorageError};
use tracing::info;

#[derive(Clone)]
pub struct HistoryEraser {
    store: Arc<dyn MessageStore>,
}

impl HistoryEraser {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Deletes all turns of `session_id` and returns how many were removed.
    ///
    /// Succeeds for sessions that never existed. The session id stays usable.
    pub async fn erase(&self, session_id: &str) -> Result<u64, StorageError> {
        let deleted = self.store.delete_all(session_id).await?;
        info!(session_id = %session_id, deleted = deleted, "Chat history erased");
        Ok(deleted)
    }
}
