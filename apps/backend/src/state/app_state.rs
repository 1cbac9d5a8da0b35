use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::sessions::SessionService;
use crate::store::SessionStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session operations over the process-wide store
    pub sessions: SessionService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state with a fresh, empty session store sized from `config`.
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(SessionStore::new(config.code_length));
        let sessions = SessionService::new(store, config.default_edition.clone());
        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    /// Shared handle to the underlying store (for the expiry task).
    pub fn store(&self) -> Arc<SessionStore> {
        Arc::clone(self.sessions.store())
    }

    /// Default configuration with an isolated store.
    pub fn for_tests() -> Self {
        Self::new(AppConfig::default())
    }
}
