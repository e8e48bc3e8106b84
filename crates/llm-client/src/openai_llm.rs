//! OpenAI-compatible LlmClient: wraps openai-client with fixed sampling parameters.

use async_trait::async_trait;
use openai_client::CompletionParams;
use prompt::{build_completion_messages, ChatMessage};
use tracing::instrument;

use super::{chat_message_to_openai, CompletionError, LlmClient, LlmConfig};
use crate::config::DEFAULT_MODEL;

/// LlmClient backed by openai-client. Temperature 0.7, at most 2048 generated tokens.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    params: CompletionParams,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            params: CompletionParams::default(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
            params: CompletionParams::default(),
        }
    }

    /// Builds a client from api key, base url and model of `config`.
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn params(&self) -> CompletionParams {
        self.params
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(
        skip(self, system_prompt, history, user_message),
        fields(model = %self.model, history_len = history.len())
    )]
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<String, CompletionError> {
        let messages = build_completion_messages(system_prompt, history, user_message);
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>, _>>()?;
        self.client
            .chat_completion(&self.model, openai_messages, self.params)
            .await
            .map_err(|e| CompletionError::Api(e.to_string()))
    }
}
