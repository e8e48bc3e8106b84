//! # Prompt
//!
//! Builds what is sent to the chat model on every turn.
//!
//! ## Parts
//!
//! - [`SystemPromptBuilder`]: persona preamble plus every knowledge document of a directory
//! - [`build_completion_messages`]: `[system, ...history, user]` message list
//! - [`ChatMessage`] / [`MessageRole`]: one element of the OpenAI `messages` array
//!
//! ## External interactions
//!
//! - **Filesystem**: knowledge documents are read at build time (see [`knowledge`]).
//! - **AI models**: output is sent to OpenAI-compatible chat completion APIs.

pub mod knowledge;
pub mod persona;
mod system_prompt;

pub use knowledge::{format_knowledge, load_knowledge_dir, KnowledgeDocument};
pub use persona::{Persona, DEFAULT_OWNER_NAME};
pub use system_prompt::SystemPromptBuilder;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Builds the message list for one completion request.
///
/// Order: System(system_prompt) → history (as given, oldest first) → User(user_message).
///
/// The user message is always appended, even when `history` already ends with the
/// same turn; callers that load history after persisting the user turn will therefore
/// send that content twice.
pub fn build_completion_messages(
    system_prompt: &str,
    history: &[ChatMessage],
    user_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(user_message));
    messages
}
