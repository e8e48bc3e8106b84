//! AppConfig: BaseConfig + BaseAppExtensions. Use load() for env-based loading.

use anyhow::Result;

use super::{AppExtensions, BaseAppExtensions, BaseConfig};

/// Full service config. Use AppConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub extensions: BaseAppExtensions,
}

impl AppConfig {
    /// Load full config from environment variables. If `bind` is provided it overrides BIND_ADDRESS.
    /// Call validate() after load to check config before init.
    pub fn load(bind: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(bind)?;
        let extensions = BaseAppExtensions::from_env()?;
        Ok(Self { base, extensions })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        let llm_url = self.extensions.llm_config().base_url();
        if reqwest::Url::parse(llm_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", llm_url);
        }
        let speech_url = self.extensions.speech_config().base_url();
        if reqwest::Url::parse(speech_url).is_err() {
            anyhow::bail!("DEEPGRAM_BASE_URL is not a valid URL: {}", speech_url);
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn extensions(&self) -> &BaseAppExtensions {
        &self.extensions
    }

    pub fn bind_address(&self) -> &str {
        &self.base.bind_address
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn knowledge_dir(&self) -> &str {
        &self.base.knowledge_dir
    }
}
