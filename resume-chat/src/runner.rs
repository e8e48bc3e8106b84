//! Entry points behind the CLI subcommands.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::chat::HistoryEraser;
use crate::components::{build_components, build_store};
use crate::config::{AppConfig, BaseConfig};
use crate::server::build_router;

/// Builds components and serves HTTP until Ctrl-C.
#[instrument(skip(config), fields(bind = %config.bind_address()))]
pub async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.base().socket_addr()?;
    let components = build_components(&config).await?;
    let router = build_router(components.state);

    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "resume-chat listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    components.repo.pool_manager().close().await;
    info!("resume-chat stopped");
    Ok(())
}

/// Erases one session's history without starting the server. Returns the deleted count.
pub async fn clear_history(config: &BaseConfig, session_id: &str) -> Result<u64> {
    let repo = build_store(config).await?;
    let deleted = HistoryEraser::new(repo.clone()).erase(session_id).await?;
    repo.pool_manager().close().await;
    Ok(deleted)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
