//! HTTP API for the Krishi chat widget and prediction forms

mod handlers;
mod render;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::backend::BackendService;
use crate::responder::IntentResponder;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<IntentResponder>,
    pub backend: Arc<dyn BackendService>,
}

impl AppState {
    pub fn new(responder: IntentResponder, backend: Arc<dyn BackendService>) -> Self {
        Self {
            responder: Arc::new(responder),
            backend,
        }
    }
}
