//! API routes for reserve-server

pub mod health;
pub mod reservations;

use axum::Router;
use axum::routing::{get, patch};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, ApiError>;

/// Create the application router.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/api/reservations/{id}",
            get(reservations::get_by_id).delete(reservations::delete),
        )
        .route(
            "/api/reservations/{id}/status",
            patch(reservations::update_status),
        )
        .with_state(state);

    let app = api
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Serve the marketing site alongside the API, as the original deployment did
    match &config.public_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}
