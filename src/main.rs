//! Jurassic Spark backend service.
//!
//! This is the application entry point. It initializes tracing, reads the
//! listening port from the environment, sets up the Axum router, and starts
//! the HTTP server.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jurassic_spark_backend::config::{AppConfig, DEFAULT_LOG_FILTER};
use jurassic_spark_backend::routes::create_router;
use jurassic_spark_backend::shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (PORT from the environment, default 3000)
    let config = AppConfig::from_env()?;

    // Create router
    let app = create_router();

    // Start server. A bind failure propagates out and exits non-zero.
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[server] Listening on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}
