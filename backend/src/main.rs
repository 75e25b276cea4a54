//! Main entry point for the trivia backend.
//!
//! This file initializes tracing, loads configuration, sets up the
//! database pool, and serves the Axum application router.
//! It orchestrates the application's startup and defines its overall structure.

use tracing_subscriber::EnvFilter;

use trivia_backend::config::Config;
use trivia_backend::{api, database};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let pool = database::connect(&config.database_url).await.unwrap();
    database::ensure_schema(&pool).await.unwrap();

    let app = api::router(pool);

    let addr = config.bind_addr();
    tracing::info!(%addr, "starting trivia backend");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
