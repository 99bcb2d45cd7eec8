use crate::LifecycleService;

use std::sync::Arc;

/// Shared handler state. Holds no server status; every request re-reads it.
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<LifecycleService>,
}

impl AppState {
    pub fn new(lifecycle: LifecycleService) -> Self {
        Self {
            lifecycle: Arc::new(lifecycle),
        }
    }
}
