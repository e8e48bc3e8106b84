//! Speech configuration: trait and env-based implementation.

use std::env;

pub const DEFAULT_DEEPGRAM_BASE_URL: &str = "https://api.deepgram.com";
pub const DEFAULT_MODEL: &str = "nova-2";
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Speech-to-text configuration interface.
pub trait SpeechConfig: Send + Sync {
    /// None when no key is configured; requests then fail with `MissingApiKey`.
    fn api_key(&self) -> Option<&str>;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn language(&self) -> &str;
}

/// Speech config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvSpeechConfig {
    pub deepgram_api_key: Option<String>,
    pub deepgram_base_url: String,
    pub deepgram_model: String,
    pub deepgram_language: String,
}

impl Default for EnvSpeechConfig {
    fn default() -> Self {
        Self {
            deepgram_api_key: None,
            deepgram_base_url: DEFAULT_DEEPGRAM_BASE_URL.to_string(),
            deepgram_model: DEFAULT_MODEL.to_string(),
            deepgram_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl SpeechConfig for EnvSpeechConfig {
    fn api_key(&self) -> Option<&str> {
        self.deepgram_api_key.as_deref()
    }
    fn base_url(&self) -> &str {
        &self.deepgram_base_url
    }
    fn model(&self) -> &str {
        &self.deepgram_model
    }
    fn language(&self) -> &str {
        &self.deepgram_language
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl EnvSpeechConfig {
    /// Load from environment variables. A missing key is not an error here.
    pub fn from_env() -> Self {
        Self {
            deepgram_api_key: non_empty_var("DEEPGRAM_API_KEY"),
            deepgram_base_url: non_empty_var("DEEPGRAM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DEEPGRAM_BASE_URL.to_string()),
            deepgram_model: non_empty_var("DEEPGRAM_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            deepgram_language: non_empty_var("DEEPGRAM_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}
