use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::db::{JsonStore, SessionRegistry};
use crate::error::AppError;
use crate::identity::AdminTable;

#[derive(Clone)]
pub struct AppState {
    /// Held for the whole load-mutate-save cycle of a request.
    pub store: Arc<Mutex<JsonStore>>,
    pub sessions: SessionRegistry,
    pub admins: Arc<AdminTable>,
}

impl AppState {
    /// Build the state and create any missing data files
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let store = JsonStore::from_config(config);
        store.init()?;

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            sessions: SessionRegistry::new(),
            admins: Arc::new(AdminTable::builtin()),
        })
    }

    /// Run one storage cycle on the blocking pool while holding the store lock
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&JsonStore, &AdminTable) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone().lock_owned().await;
        let admins = self.admins.clone();

        tokio::task::spawn_blocking(move || f(&store, &admins))
            .await
            .map_err(|e| AppError::Internal(format!("Storage task failed: {}", e)))?
    }
}
