//! Application state management.
//!
//! Shared state passed to the routers: configuration and the
//! PostgreSQL connection pool.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloned for each router (the connection pool is an `Arc` internally).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
