//! Reservation API handlers
//!
//! POST   /api/reservations             — submit a booking request
//! GET    /api/reservations             — list all (admin)
//! GET    /api/reservations/{id}        — fetch one
//! PATCH  /api/reservations/{id}/status — confirm / cancel (admin)
//! DELETE /api/reservations/{id}        — remove permanently (admin)

use axum::Json;
use axum::extract::{Path, State};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{Value, json};

use super::ApiResult;
use crate::db::reservations::{self, NewReservation, ReservationStatus};
use crate::error::ApiError;
use crate::state::AppState;

// ── Request types ──

#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "specialRequests")]
    pub special_requests: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

// ── Validation helpers ──

/// Basic syntactic check: local-part@domain with at least one dot in the
/// domain, no whitespace and no second '@'.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Reservation dates must be today or later, at day granularity.
/// Unparseable dates are rejected.
fn is_bookable_date(date: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d >= today,
        Err(_) => false,
    }
}

fn required(field: &Option<String>) -> Result<&str, ApiError> {
    match field.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation("All required fields must be filled")),
    }
}

// ── POST /api/reservations ──

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> ApiResult<Value> {
    let date = required(&req.date)?;
    let time = required(&req.time)?;
    let name = required(&req.name)?;
    let email = required(&req.email)?;
    let phone = required(&req.phone)?;
    let guests = match req.guests {
        Some(g) if g >= 1 => g,
        _ => return Err(ApiError::validation("All required fields must be filled")),
    };

    if !is_valid_email(email) {
        return Err(ApiError::validation("Invalid email address"));
    }

    if !is_bookable_date(date, Local::now().date_naive()) {
        return Err(ApiError::validation(
            "Reservation date must be in the future",
        ));
    }

    let new = NewReservation {
        date,
        time,
        guests,
        name,
        email,
        phone,
        special_requests: req.special_requests.as_deref().unwrap_or(""),
    };

    let id = reservations::insert(&state.pool, &new)
        .await
        .map_err(ApiError::storage(
            "Error saving reservation. Please try again.",
        ))?;

    tracing::info!(reservation_id = id, guests, "Reservation submitted");

    Ok(Json(json!({
        "success": true,
        "message": "Reservation submitted successfully! We will contact you shortly to confirm.",
        "reservationId": id,
    })))
}

// ── GET /api/reservations ──

pub async fn list(State(state): State<AppState>) -> ApiResult<Value> {
    let rows = reservations::list_all(&state.pool)
        .await
        .map_err(ApiError::storage("Error fetching reservations"))?;

    Ok(Json(json!({ "success": true, "reservations": rows })))
}

// ── GET /api/reservations/{id} ──

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Value> {
    let row = reservations::find_by_id(&state.pool, id)
        .await
        .map_err(ApiError::storage("Error fetching reservation"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({ "success": true, "reservation": row })))
}

// ── PATCH /api/reservations/{id}/status ──

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Value> {
    // Validated before touching the store
    let status: ReservationStatus = req
        .status
        .as_deref()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            ApiError::validation("Invalid status. Must be: pending, confirmed, or cancelled")
        })?;

    let affected = reservations::update_status(&state.pool, id, status)
        .await
        .map_err(ApiError::storage("Error updating reservation"))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!(reservation_id = id, status = %status, "Reservation status updated");

    Ok(Json(json!({
        "success": true,
        "message": "Reservation status updated successfully",
    })))
}

// ── DELETE /api/reservations/{id} ──

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Value> {
    let affected = reservations::delete(&state.pool, id)
        .await
        .map_err(ApiError::storage("Error deleting reservation"))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!(reservation_id = id, "Reservation deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Reservation deleted successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn date_validation() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        assert!(is_bookable_date("2026-08-23", today));
        assert!(is_bookable_date("2026-08-24", today));
        assert!(is_bookable_date("2099-01-01", today));

        assert!(!is_bookable_date("2026-08-22", today));
        assert!(!is_bookable_date("2000-01-01", today));
        assert!(!is_bookable_date("not-a-date", today));
        assert!(!is_bookable_date("", today));
    }

    #[test]
    fn required_fields() {
        assert_eq!(required(&Some("  A  ".into())).unwrap(), "A");
        assert!(required(&Some("   ".into())).is_err());
        assert!(required(&Some(String::new())).is_err());
        assert!(required(&None).is_err());
    }
}
