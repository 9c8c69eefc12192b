//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::Authenticator;
use crate::db::repository::FullRepository;
use crate::services::StatisticsCatalog;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Credential checks for protected endpoints
    pub auth: Authenticator,
    /// Program and weekday lists used by the statistics report
    pub catalog: Arc<StatisticsCatalog>,
}

impl AppState {
    /// Create a state with no credential validators and the built-in catalog.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            auth: Authenticator::default(),
            catalog: Arc::new(StatisticsCatalog::default()),
        }
    }

    pub fn with_auth(mut self, auth: Authenticator) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_catalog(mut self, catalog: StatisticsCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}
