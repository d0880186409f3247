//! Router construction

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::directory::Directory;
use super::handlers;

/// Build the full axum router with all routes and middleware
pub fn build_router(directory: Directory) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/employee", post(handlers::create_employee))
        .route(
            "/employee/:id",
            get(handlers::get_employee).put(handlers::update_employee),
        )
        .route(
            "/employee/:id/reporting-structure",
            get(handlers::reporting_structure),
        )
        .route(
            "/employee/:id/compensation",
            get(handlers::get_compensation)
                .post(handlers::create_compensation)
                .put(handlers::update_compensation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(directory))
}
