pub mod actions;
pub mod page;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::AppConfig, dao::board_store::BoardStore, error::ServiceError};

/// Cheaply clonable handle to the shared application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the storage handle and runtime config.
pub struct AppState {
    board_store: RwLock<Option<Arc<dyn BoardStore>>>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            board_store: RwLock::new(None),
            config,
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the current board store, if one is installed.
    pub async fn board_store(&self) -> Option<Arc<dyn BoardStore>> {
        let guard = self.board_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the board store or fail with a degraded-mode error.
    pub async fn require_board_store(&self) -> Result<Arc<dyn BoardStore>, ServiceError> {
        self.board_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a new board store implementation and leave degraded mode.
    pub async fn install_board_store(&self, store: Arc<dyn BoardStore>) {
        let mut guard = self.board_store.write().await;
        *guard = Some(store);
    }

    /// Remove the current board store and enter degraded mode.
    pub async fn clear_board_store(&self) {
        let mut guard = self.board_store.write().await;
        guard.take();
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.board_store.read().await;
        guard.is_none()
    }
}
