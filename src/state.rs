use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::repo::{demo, InMemoryStore, ProfileStore};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub store: Arc<dyn ProfileStore>,
}

impl AppState {
    pub async fn new(cfg: Config) -> Result<Self> {
        let state = Self::with_store(cfg, Arc::new(InMemoryStore::new()));

        if state.cfg.demo.seed {
            demo::seed(state.store.as_ref()).await?;
        } else {
            debug!("demo seeding disabled");
        }

        Ok(state)
    }

    pub fn with_store(cfg: Config, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            store,
        }
    }
}
