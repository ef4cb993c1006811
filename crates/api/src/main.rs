//! Webkit24 Growth Platform - Main Entry Point

use std::sync::Arc;

use api::{init_logging, run_server, AppState, Settings};
use llm_gateway::{FileAttemptSink, LlmGateway};
use storage::Repository;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Webkit24 Growth Platform v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;

    let repository = match &settings.database_url {
        Some(url) => Repository::connect(url).await?,
        None => {
            warn!("No database URL configured, using in-memory storage");
            Repository::in_memory().await?
        }
    };

    let sink = Arc::new(FileAttemptSink::new(&settings.llm.failure_log));
    let gateway = LlmGateway::new(settings.gateway_config(), sink)?;

    let state = Arc::new(AppState::new(repository, gateway));
    run_server(&settings.bind_addr, state, &settings.rate_limits).await
}
