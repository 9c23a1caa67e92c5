use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use school_registry::adapters::http::{api_router, AppState};
use school_registry::adapters::memory::InMemoryEntityStore;
use school_registry::config::AppConfig;
use school_registry::ports::EntityStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let store: Arc<dyn EntityStore> = Arc::new(InMemoryEntityStore::new());
    let state = AppState::new(store);

    let router = api_router(
        state,
        Arc::new(config.auth.clone()),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "school registry listening");

    axum::serve(listener, router).await?;
    Ok(())
}
