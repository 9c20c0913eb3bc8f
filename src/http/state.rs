//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::AutoRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn AutoRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn AutoRepository>) -> Self {
        Self { repository }
    }
}
