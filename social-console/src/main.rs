use std::sync::Arc;

use dotenvy::dotenv;
use social_console::config::get_configuration;
use social_console::services::{metrics, ClientRepo, CredentialStore, MockPublisher, StagingArea};
use social_console::startup::build_router;
use social_console::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing();
    metrics::init_metrics();

    let credentials =
        CredentialStore::open(&configuration.storage.data_dir, &configuration.admin).await?;
    let clients = ClientRepo::open(&configuration.storage.data_dir).await?;
    let staging = StagingArea::open(&configuration.storage.staging_dir).await?;

    let state = AppState::new(
        Arc::new(credentials),
        Arc::new(clients),
        Arc::new(staging),
        Arc::new(MockPublisher::new()),
    );

    let app = build_router(state, configuration.session.expiry_hours);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting social-console on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
