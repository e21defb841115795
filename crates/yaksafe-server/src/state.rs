//! Application state for the API server.

use std::sync::Arc;

use yaksafe_core::KeywordClassifier;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Content classifier. Immutable after startup, so no lock is needed.
    pub classifier: Arc<KeywordClassifier>,
    /// Whether /moderate responses include the per-category hits map.
    pub include_hits: bool,
}

impl AppState {
    /// Creates application state with the fixed classifier tables.
    pub fn new(include_hits: bool) -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier::new()),
            include_hits,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}
