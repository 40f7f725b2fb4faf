use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;


use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config first so RUST_LOG from .env is visible to the filter
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_directory_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::init_db_pool(
        &config.database_url,
        config.max_pool_size,
        Duration::from_secs(config.acquire_timeout_secs),
    )
    .await?;
    tracing::info!("Database ready at {}", config.database_url);

    let app = routes::app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    tracing::info!("Listening on {}", config.server_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
