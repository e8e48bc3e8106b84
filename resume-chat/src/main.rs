//! Binary for the resume chat backend.

use anyhow::Result;
use clap::Parser;
use resume_chat::{
    clear_history, init_tracing, load_config, run_server, BaseConfig, Cli, Commands,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let config = load_config(bind)?;
            init_tracing(config.log_file())?;
            run_server(config).await
        }
        Commands::ClearHistory { session_id } => {
            let config = BaseConfig::load(None)?;
            init_tracing(&config.log_file)?;
            let deleted = clear_history(&config, &session_id).await?;
            println!("Deleted {} turns for session {}", deleted, session_id);
            Ok(())
        }
    }
}
