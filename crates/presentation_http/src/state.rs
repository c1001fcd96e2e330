//! Application state shared across handlers

use std::sync::Arc;

use application::DateSortService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Batch date sorting service
    pub sort_service: Arc<DateSortService>,
}

impl AppState {
    /// Build the state shared by all handlers
    #[must_use]
    pub fn new() -> Self {
        Self {
            sort_service: Arc::new(DateSortService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
