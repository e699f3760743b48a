//! Contact Intake - Main entry point
//!
//! Loads configuration, connects the submission store and serves the HTTP API
//! until Ctrl-C.

use anyhow::Result;
use contact_intake::repositories::{
    InMemorySubmissionRepository, MongoSubmissionRepository, SubmissionRepository,
};
use contact_intake::{AppState, Config, StoreBackend, SubmissionService, SubmissionServiceImpl};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository: Arc<dyn SubmissionRepository> = match config.store_backend() {
        StoreBackend::Memory => {
            warn!("Using in-memory store; submissions are lost on shutdown");
            Arc::new(InMemorySubmissionRepository::new())
        }
        StoreBackend::Mongo => {
            let repository = MongoSubmissionRepository::connect(
                &config.mongo_url,
                &config.db_name,
                &config.collection_name,
            )
            .await?;
            repository.ensure_indexes().await?;
            info!(
                "Connected to MongoDB database '{}', collection '{}'",
                config.db_name, config.collection_name
            );
            Arc::new(repository)
        }
    };

    let service = Arc::new(SubmissionServiceImpl::new(repository)) as Arc<dyn SubmissionService>;
    let state = AppState::new(service);

    info!("Starting contact intake server on {}", config.socket_addr());
    contact_intake::server::run_server(state, &config).await?;

    info!("Contact intake server shutdown complete");
    Ok(())
}
