//! Shared test doubles for resume-chat integration tests.
//!
//! - `ScriptedLlm`: records every completion call and answers from a script.
//! - `FlakyStore`: wraps the SQLite repository and fails selected appends.
//! - `RecordingTranscriber`: counts calls and returns a fixed result.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use llm_client::{CompletionError, LlmClient};
use prompt::{build_completion_messages, ChatMessage, Persona, SystemPromptBuilder};
use resume_chat::{AppState, ChatService, HistoryEraser};
use speech_client::{Transcriber, TranscriptionError};
use storage::{ChatTurn, ChatTurnRepository, MessageStore, StorageError, TurnRole};
use tempfile::TempDir;

/// One recorded `complete()` call.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub system_prompt: String,
    pub history: Vec<ChatMessage>,
    pub user_message: String,
}

impl CompletionCall {
    /// The message array an OpenAI-compatible client would send.
    pub fn request_messages(&self) -> Vec<ChatMessage> {
        build_completion_messages(&self.system_prompt, &self.history, &self.user_message)
    }
}

/// LLM double: pops scripted answers in order; repeats "默认回复" once the script is empty.
#[derive(Default)]
pub struct ScriptedLlm {
    script: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<CompletionCall>>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(replies: &[&str]) -> Self {
        let llm = Self::new();
        for reply in replies {
            llm.push_ok(reply);
        }
        llm
    }

    pub fn push_ok(&self, reply: &str) {
        self.script.lock().unwrap().push_back(Ok(reply.to_string()));
    }

    pub fn push_err(&self, error: &str) {
        self.script.lock().unwrap().push_back(Err(error.to_string()));
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(CompletionCall {
            system_prompt: system_prompt.to_string(),
            history: history.to_vec(),
            user_message: user_message.to_string(),
        });
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(e)) => Err(CompletionError::Api(e)),
            None => Ok("默认回复".to_string()),
        }
    }
}

/// Store double: real SQLite underneath, with switchable failures.
pub struct FlakyStore {
    inner: ChatTurnRepository,
    fail_role: Mutex<Option<TurnRole>>,
    fail_delete: Mutex<bool>,
}

impl FlakyStore {
    pub fn new(inner: ChatTurnRepository) -> Self {
        Self {
            inner,
            fail_role: Mutex::new(None),
            fail_delete: Mutex::new(false),
        }
    }

    pub fn fail_appends_of(&self, role: TurnRole) {
        *self.fail_role.lock().unwrap() = Some(role);
    }

    pub fn fail_deletes(&self) {
        *self.fail_delete.lock().unwrap() = true;
    }
}

#[async_trait]
impl MessageStore for FlakyStore {
    async fn append(
        &self,
        session_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<ChatTurn, StorageError> {
        if *self.fail_role.lock().unwrap() == Some(role) {
            return Err(StorageError::Database(format!("{} write rejected", role)));
        }
        self.inner.append(session_id, role, content).await
    }

    async fn recent(&self, session_id: &str, limit: i64) -> Result<Vec<ChatTurn>, StorageError> {
        self.inner.recent(session_id, limit).await
    }

    async fn delete_all(&self, session_id: &str) -> Result<u64, StorageError> {
        if *self.fail_delete.lock().unwrap() {
            return Err(StorageError::Connection("database is locked".to_string()));
        }
        self.inner.delete_all(session_id).await
    }

    async fn count(&self, session_id: &str) -> Result<i64, StorageError> {
        self.inner.count(session_id).await
    }
}

/// Transcriber double: counts calls, remembers the last content type.
pub struct RecordingTranscriber {
    calls: AtomicUsize,
    last_content_type: Mutex<Option<String>>,
    last_len: AtomicUsize,
    result: Mutex<Option<TranscriptionError>>,
    transcript: String,
}

impl RecordingTranscriber {
    pub fn returning(transcript: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_content_type: Mutex::new(None),
            last_len: AtomicUsize::new(0),
            result: Mutex::new(None),
            transcript: transcript.to_string(),
        }
    }

    pub fn failing(error: TranscriptionError) -> Self {
        let t = Self::returning("");
        *t.result.lock().unwrap() = Some(error);
        t
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_content_type(&self) -> Option<String> {
        self.last_content_type.lock().unwrap().clone()
    }

    pub fn last_len(&self) -> usize {
        self.last_len.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for RecordingTranscriber {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_len.store(audio.len(), Ordering::SeqCst);
        *self.last_content_type.lock().unwrap() = content_type.map(str::to_string);
        match self.result.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(self.transcript.clone()),
        }
    }
}

pub async fn memory_repo() -> ChatTurnRepository {
    ChatTurnRepository::new("sqlite::memory:")
        .await
        .expect("in-memory repo")
}

/// Knowledge dir with one resume document.
pub fn knowledge_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("resume.md"),
        "# 李伟\n后端工程师，熟悉 Rust 与分布式系统。\n电话: 138-0000-0000",
    )
    .expect("write knowledge");
    dir
}

pub fn prompt_builder(dir: &TempDir) -> SystemPromptBuilder {
    SystemPromptBuilder::new(Persona::default(), dir.path())
}

pub fn chat_service(
    store: Arc<dyn MessageStore>,
    dir: &TempDir,
    llm: Arc<ScriptedLlm>,
) -> ChatService {
    ChatService::new(store, prompt_builder(dir), llm)
}

pub fn app_state(
    store: Arc<dyn MessageStore>,
    dir: &TempDir,
    llm: Arc<ScriptedLlm>,
    transcriber: Arc<RecordingTranscriber>,
) -> AppState {
    let chat = Arc::new(chat_service(store.clone(), dir, llm));
    AppState::new(chat, HistoryEraser::new(store), transcriber)
}
