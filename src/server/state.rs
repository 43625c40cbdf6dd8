//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` after the database is connected and migrated, then
//! cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool and cloning the
/// state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing every repository.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around the given connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
