use backend_lib::{config::Settings, router, storage::FlatFileUserStore, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Try the default config location first, then the local fallback
    let config = Settings::load().or_else(|_| Settings::load_from("./config/default.toml"))?;

    // Initialize tracing; RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    // Create storage
    let users = Arc::new(FlatFileUserStore::new(&config.data_dir)?);

    // Create application state and the router
    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(users, config));
    let app = router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
