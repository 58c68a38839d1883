//! Plantarium server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use plantarium::api::{create_router, AppState};
use plantarium::config::{AppConfig, LogFormat};
use plantarium::store::{create_store, PlantStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let store_config = config.store_config();
    match &store_config {
        StoreConfig::Mongo { database, .. } => {
            tracing::info!(%database, "Using MongoDB document store");
        }
        StoreConfig::Seed => {
            tracing::warn!(
                "DATABASE_URL not set; serving seed data, writes will be refused"
            );
        }
    }

    let store = create_store(store_config)
        .await
        .context("failed to initialise document store")?;
    let store: Arc<dyn PlantStore> = Arc::from(store);

    let state = AppState::new(store, &config.database);
    let router = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("plantarium=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
