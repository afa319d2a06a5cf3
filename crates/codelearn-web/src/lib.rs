//! Learn to Code web frontend server.
//!
//! Serves the static tutorial pages (the home page and the per-topic
//! study guides) embedded into the binary, the way a production build
//! of the frontend is deployed.

pub mod config;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the Axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .merge(routes::health::routes())
        // Static pages - must be last (fallback)
        .fallback(routes::static_files::serve_static)
        // Middleware
        .layer(TraceLayer::new_for_http())
}
