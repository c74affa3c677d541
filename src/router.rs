use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;

use crate::db::ReadingStore;
use crate::handlers::{cards_handler, results_handler};
use crate::middleware::log_request;
use crate::service::{ReadingPicker, ThreadRngPicker};

/// Shared, read-only state handed to every handler.
pub struct TarotState<S> {
    pub store: Arc<S>,
    pub picker: Arc<dyn ReadingPicker>,
}

impl<S> Clone for TarotState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            picker: Arc::clone(&self.picker),
        }
    }
}

impl<S: ReadingStore> TarotState<S> {
    pub fn new(store: S) -> Self {
        Self::with_picker(store, Arc::new(ThreadRngPicker))
    }

    pub fn with_picker(store: S, picker: Arc<dyn ReadingPicker>) -> Self {
        Self {
            store: Arc::new(store),
            picker,
        }
    }
}

pub fn tarot_router<S: ReadingStore>(state: TarotState<S>) -> Router {
    Router::new()
        .route("/cards", get(cards_handler::<S>))
        .route("/results", post(results_handler::<S>))
        .layer(from_fn(log_request))
        .with_state(state)
}
