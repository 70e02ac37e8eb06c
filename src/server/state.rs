//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a pool handle, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Token expected in the `X-Admin-Token` header of admin requests.
    pub admin_token: String,

    /// Client addresses allowed to call admin endpoints; empty allows every address.
    pub admin_allowed_ips: Vec<String>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_token` - Configured admin token
    pub fn new(db: DatabaseConnection, admin_token: String) -> Self {
        Self {
            db,
            admin_token,
            admin_allowed_ips: Vec::new(),
        }
    }

    /// Restricts admin endpoints to the given client addresses.
    pub fn with_admin_allowed_ips(mut self, admin_allowed_ips: Vec<String>) -> Self {
        self.admin_allowed_ips = admin_allowed_ips;
        self
    }
}
