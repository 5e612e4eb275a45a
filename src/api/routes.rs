use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::DatasetStore;

pub fn create_router<S: DatasetStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Read-only inventory queries
        .route(
            "/check_availability",
            get(handlers::check_availability::<S>),
        )
        .route(
            "/count_published_books",
            get(handlers::count_published_books::<S>),
        )
        .route(
            "/check_borrow_books",
            get(handlers::check_borrow_books::<S>),
        )
        // The dump answers on every remaining path, whatever the method
        .route("/", any(handlers::get_dump::<S>))
        .fallback(handlers::get_dump::<S>)
}
