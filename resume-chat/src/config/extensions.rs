//! App extensions trait and default implementation (LLM + speech).
//! The concrete configs are implemented in llm-client and speech-client.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};
use speech_client::{EnvSpeechConfig, SpeechConfig};

/// Application extension config. Implement this trait to inject custom config.
pub trait AppExtensions: Send + Sync {
    fn llm_config(&self) -> &dyn LlmConfig;
    fn speech_config(&self) -> &dyn SpeechConfig;
}

/// Env-backed extensions used by the server binary.
#[derive(Debug, Clone)]
pub struct BaseAppExtensions {
    pub llm: EnvLlmConfig,
    pub speech: EnvSpeechConfig,
}

impl AppExtensions for BaseAppExtensions {
    fn llm_config(&self) -> &dyn LlmConfig {
        &self.llm
    }
    fn speech_config(&self) -> &dyn SpeechConfig {
        &self.speech
    }
}

impl BaseAppExtensions {
    /// Load from environment variables. Fails when OPENAI_API_KEY is missing.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            llm: EnvLlmConfig::from_env()?,
            speech: EnvSpeechConfig::from_env(),
        })
    }
}
