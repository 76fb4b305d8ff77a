use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::source::CacheSource;

pub fn create_router<S: CacheSource + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check::<S>))
        // Index pages: redirect one level down
        .route("/", get(handlers::page::<S>))
        .route("/:ch", get(handlers::page::<S>))
        // Cache state at one op
        .route("/:ch/:op", get(handlers::page::<S>))
        .route("/:ch/:op/data.json", get(handlers::op_page_data::<S>))
        .fallback(handlers::not_found)
}
