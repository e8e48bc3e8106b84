//! Chat turn repository: persistence and queries for conversation turns.
//!
//! Uses SqlitePoolManager and the ChatTurn model. Implements [`MessageStore`].
//! External: SQLite via sqlx.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{ChatTurn, TurnRole};
use crate::repository::MessageStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct ChatTurnRepository {
    pool_manager: SqlitePoolManager,
}

impl ChatTurnRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    /// Wraps an existing pool; the schema is created if missing.
    pub async fn with_pool_manager(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    pub fn pool_manager(&self) -> &SqlitePoolManager {
        &self.pool_manager
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating chat_messages table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_messages (
                id TEXT PRIMARY KEY,
                session_id TEXT NOT NULL,
                role TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_chat_messages_session_created ON chat_messages(session_id, created_at)",
        )
        .execute(pool)
        .await?;

        info!("chat_messages table ready");
        Ok(())
    }

    pub async fn save(&self, turn: &ChatTurn) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, session_id, role, content, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&turn.id)
        .bind(&turn.session_id)
        .bind(turn.role)
        .bind(&turn.content)
        .bind(turn.created_at)
        .execute(pool)
        .await?;

        debug!(
            id = %turn.id,
            session_id = %turn.session_id,
            role = %turn.role,
            content_len = turn.content.len(),
            "Saved chat turn"
        );
        Ok(())
    }

    pub async fn get_turn_by_id(&self, turn_id: &str) -> Result<Option<ChatTurn>, StorageError> {
        let pool = self.pool_manager.pool();

        let turn = sqlx::query_as::<_, ChatTurn>("SELECT * FROM chat_messages WHERE id = ?")
            .bind(turn_id)
            .fetch_optional(pool)
            .await?;

        Ok(turn)
    }

    /// Newest first; equal timestamps fall back to insertion order.
    pub async fn get_recent_turns(
        &self,
        session_id: &str,
        limit: i64,
    ) -> Result<Vec<ChatTurn>, StorageError> {
        let pool = self.pool_manager.pool();

        let turns: Vec<ChatTurn> = sqlx::query_as::<_, ChatTurn>(
            "SELECT id, session_id, role, content, created_at FROM chat_messages \
             WHERE session_id = ? ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(session_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        debug!(
            session_id = %session_id,
            count = turns.len(),
            limit = limit,
            "Retrieved recent chat turns"
        );

        Ok(turns)
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<u64, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM chat_messages WHERE session_id = ?")
            .bind(session_id)
            .execute(pool)
            .await?;

        info!(
            session_id = %session_id,
            deleted = result.rows_affected(),
            "Deleted chat turns for session"
        );
        Ok(result.rows_affected())
    }

    pub async fn count_session(&self, session_id: &str) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chat_messages WHERE session_id = ?")
                .bind(session_id)
                .fetch_one(pool)
                .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl MessageStore for ChatTurnRepository {
    async fn append(
        &self,
        session_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<ChatTurn, StorageError> {
        let turn = ChatTurn::new(session_id, role, content);
        self.save(&turn).await?;
        Ok(turn)
    }

    async fn recent(&self, session_id: &str, limit: i64) -> Result<Vec<ChatTurn>, StorageError> {
        self.get_recent_turns(session_id, limit).await
    }

    async fn delete_all(&self, session_id: &str) -> Result<u64, StorageError> {
        self.delete_session(session_id).await
    }

    async fn count(&self, session_id: &str) -> Result<i64, StorageError> {
        self.count_session(session_id).await
    }
}
