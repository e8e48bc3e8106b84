//! Base config: HTTP bind address, logging, database, knowledge documents. Loaded from env.

use anyhow::{Context, Result};
use prompt::DEFAULT_OWNER_NAME;
use std::env;
use std::net::SocketAddr;

/// Upper bound for request bodies (audio uploads): 25 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Base config: everything not owned by a client crate.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BIND_ADDRESS, e.g. 0.0.0.0:3000
    pub bind_address: String,
    /// Chat turn database (SQLite file path or sqlite: URL)
    pub database_url: String,
    /// Log file path
    pub log_file: String,
    /// Directory of .md/.txt knowledge documents
    pub knowledge_dir: String,
    /// Whose resume the assistant answers for
    pub owner_name: String,
    /// MAX_UPLOAD_BYTES
    pub max_upload_bytes: usize,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl BaseConfig {
    /// Load from environment variables. `bind` overrides BIND_ADDRESS if provided.
    pub fn load(bind: Option<String>) -> Result<Self> {
        let bind_address = bind
            .or_else(|| non_empty_var("BIND_ADDRESS"))
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let database_url =
            non_empty_var("DATABASE_URL").unwrap_or_else(|| "./data/chat.db".to_string());
        let log_file =
            non_empty_var("LOG_FILE").unwrap_or_else(|| "logs/resume-chat.log".to_string());
        let knowledge_dir =
            non_empty_var("KNOWLEDGE_DIR").unwrap_or_else(|| "./knowledge".to_string());
        let owner_name = non_empty_var("ASSISTANT_OWNER_NAME")
            .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string());
        let max_upload_bytes = match non_empty_var("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MAX_UPLOAD_BYTES is not a number: {}", raw))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_address,
            database_url,
            log_file,
            knowledge_dir,
            owner_name,
            max_upload_bytes,
        })
    }

    /// Validate config (bind address must parse as a socket address).
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = &self.bind_address;
        let message = || format!("BIND_ADDRESS is not a valid socket address: {addr}");
        addr.parse().with_context(message)
    }
}
