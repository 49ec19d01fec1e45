//! reserve-server — restaurant reservation API
//!
//! Long-running service that:
//! - Accepts reservation requests from the website booking form
//! - Stores them in SQLite and exposes lifecycle management (confirm/cancel)
//! - Serves the static marketing site when PUBLIC_DIR is set

use reserve_server::api;
use reserve_server::config::Config;
use reserve_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reserve_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting reserve-server");

    // Initialize application state (connects the pool, applies migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state.clone(), &config);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("reserve-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Pool is closed explicitly so pending writes flush before exit
    state.pool.close().await;
    tracing::info!("Database connection closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
