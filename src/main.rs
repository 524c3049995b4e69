mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod patterns;
mod router;
mod routes;
mod site;
mod state;
mod views;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("disco-site starting");

    let config = Config::from_env()?;
    config.log_startup();

    let routes = site::route_table().context("Invalid site route table")?;

    let state = AppState {
        routes: Arc::new(routes),
        config: Arc::new(config.clone()),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app::build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
