//! Reservation table queries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Reservation lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub status: String,
    pub created_at: String,
}

/// Column values for a new reservation. Status and created_at are
/// defaulted by the store at insert time.
pub struct NewReservation<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub guests: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub special_requests: &'a str,
}

/// Insert a reservation, returning the assigned id.
pub async fn insert(pool: &SqlitePool, new: &NewReservation<'_>) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO reservations (date, time, guests, name, email, phone, special_requests)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(new.date)
    .bind(new.time)
    .bind(new.guests)
    .bind(new.name)
    .bind(new.email)
    .bind(new.phone)
    .bind(new.special_requests)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// All reservations, newest first. Id breaks created_at ties since the
/// timestamp has second granularity.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Reservation>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM reservations ORDER BY created_at DESC, id DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Reservation>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM reservations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite the status. Returns the number of rows affected (zero when
/// no reservation has this id).
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: ReservationStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE reservations SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Hard delete. Returns the number of rows affected.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
