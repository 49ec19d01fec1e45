//! reserve-server — restaurant reservation API
//!
//! Library root so integration tests can build the router in-process.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
