use std::sync::Arc;

use crate::{
    config::Config, persistence::Persistence, service::RecipeService, store::DocumentStore,
};

/// Shared handler state. Both surfaces talk to the same store instance;
/// the store is the sole source of truth.
pub struct AppState {
    pub config: Config,
    pub service: RecipeService,
    pub persistence: Persistence,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Arc<Self> {
        Arc::new(Self {
            config,
            service: RecipeService::new(store.clone()),
            persistence: Persistence::new(store),
        })
    }
}
