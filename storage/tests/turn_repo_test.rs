//! Integration tests for [`storage::ChatTurnRepository`] through the [`storage::MessageStore`] trait.
//!
//! Uses an in-memory SQLite database.

use storage::{ChatTurnRepository, MessageStore, StorageError, TurnRole};

async fn memory_store() -> ChatTurnRepository {
    ChatTurnRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

/// **Test: append returns the stored turn with a generated id.**
#[tokio::test]
async fn test_append_returns_stored_turn() {
    let store = memory_store().await;

    let turn = store
        .append("session-1", TurnRole::User, "你好")
        .await
        .expect("append");

    assert!(!turn.id.is_empty());
    assert_eq!(turn.session_id, "session-1");
    assert_eq!(turn.role, TurnRole::User);
    assert_eq!(turn.content, "你好");
    assert_eq!(store.count("session-1").await.expect("count"), 1);
}

/// **Test: recent returns at most `limit` turns, newest first.**
///
/// **Setup:** 25 turns in one session.
/// **Expected:** 20 turns; reversing gives non-decreasing created_at and the last 20 contents.
#[tokio::test]
async fn test_recent_is_bounded_and_newest_first() {
    let store = memory_store().await;

    for i in 0..25 {
        let role = if i % 2 == 0 { TurnRole::User } else { TurnRole::Assistant };
        store
            .append("bounded", role, &format!("turn {}", i))
            .await
            .expect("append");
    }

    let recent = store.recent("bounded", 20).await.expect("recent");
    assert_eq!(recent.len(), 20);
    assert_eq!(recent[0].content, "turn 24");
    assert_eq!(recent[19].content, "turn 5");

    let chronological: Vec<_> = recent.into_iter().rev().collect();
    for pair in chronological.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

/// **Test: recent for an unknown session is empty, not an error.**
#[tokio::test]
async fn test_recent_unknown_session_is_empty() {
    let store = memory_store().await;

    let recent = store.recent("never-used", 20).await.expect("recent");
    assert!(recent.is_empty());
}

/// **Test: turns are partitioned by session id.**
#[tokio::test]
async fn test_recent_filters_by_session() {
    let store = memory_store().await;

    for i in 0..3 {
        store
            .append("a", TurnRole::User, &format!("a{}", i))
            .await
            .expect("append a");
        store
            .append("b", TurnRole::User, &format!("b{}", i))
            .await
            .expect("append b");
    }

    let a = store.recent("a", 20).await.expect("recent a");
    assert_eq!(a.len(), 3);
    assert!(a.iter().all(|t| t.session_id == "a"));
}

/// **Test: delete_all empties the session and is idempotent.**
///
/// **Expected:** First call removes 4, second call removes 0, recent is empty, other sessions untouched.
#[tokio::test]
async fn test_delete_all_is_idempotent() {
    let store = memory_store().await;

    for _ in 0..4 {
        store
            .append("erase-me", TurnRole::User, "x")
            .await
            .expect("append");
    }
    store
        .append("keep-me", TurnRole::User, "y")
        .await
        .expect("append");

    assert_eq!(store.delete_all("erase-me").await.expect("first delete"), 4);
    assert_eq!(store.delete_all("erase-me").await.expect("second delete"), 0);
    assert!(store.recent("erase-me", 20).await.expect("recent").is_empty());
    assert_eq!(store.count("keep-me").await.expect("count"), 1);
}

/// **Test: delete_all on a session that never existed reports zero.**
#[tokio::test]
async fn test_delete_all_unknown_session() {
    let store = memory_store().await;

    assert_eq!(store.delete_all("ghost").await.expect("delete"), 0);
}

/// **Test: operations on a closed pool surface StorageError.**
#[tokio::test]
async fn test_closed_pool_reports_storage_error() {
    let store = memory_store().await;
    store.pool_manager().close().await;

    let err = store
        .append("s", TurnRole::User, "x")
        .await
        .expect_err("closed pool must fail");
    assert!(matches!(err, StorageError::Connection(_)));
}
