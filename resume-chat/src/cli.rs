//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "resume-chat")]
#[command(about = "Resume site chat assistant backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (config from env; --bind overrides BIND_ADDRESS).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Delete every stored turn of one session.
    ClearHistory {
        session_id: String,
    },
}

/// Load and validate AppConfig from environment. If `bind` is provided it overrides BIND_ADDRESS.
pub fn load_config(bind: Option<String>) -> Result<AppConfig> {
    let config = AppConfig::load(bind)?;
    config.validate()?;
    Ok(config)
}
