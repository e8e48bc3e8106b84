//! Store abstraction for chat turns.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{ChatTurn, TurnRole};

/// Append-only store of chat turns partitioned by session id.
///
/// A session has no record of its own: it exists as long as at least one turn
/// carries its id. Any string is a valid session id.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Inserts one turn and returns it as stored.
    async fn append(
        &self,
        session_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<ChatTurn, StorageError>;

    /// Returns at most `limit` turns of the session, newest first.
    async fn recent(&self, session_id: &str, limit: i64) -> Result<Vec<ChatTurn>, StorageError>;

    /// Removes every turn of the session and returns how many were removed.
    async fn delete_all(&self, session_id: &str) -> Result<u64, StorageError>;

    /// Number of turns stored for the session.
    async fn count(&self, session_id: &str) -> Result<i64, StorageError>;
}
