//! API error taxonomy for reserve-server
//!
//! Three variants cover the whole surface: client input failed a
//! precondition (400), the id has no matching row (404), or the store
//! itself failed (500). Storage detail is logged server-side and never
//! leaked to the client; every error body carries `success: false` and a
//! human-readable message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed validation
    #[error("{0}")]
    Validation(String),

    /// No reservation matches the requested id
    #[error("Reservation not found")]
    NotFound,

    /// Underlying read/write failure; `message` is what the client sees
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a sqlx error with the client-facing message for this call site.
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage { message, source } => {
                tracing::error!(error = %source, "Database error: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(json!({ "success": false, "message": self.to_string() })),
        )
            .into_response()
    }
}
