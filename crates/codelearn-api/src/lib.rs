//! Learn to Code HTTP/JSON API.
//!
//! This crate serves the topic directory over standard REST endpoints so
//! the web frontend and any other HTTP client can consume it.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, Args};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use codelearn_core::TopicDirectory;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Topic directory, fixed at startup.
    pub directory: Arc<TopicDirectory>,
}

impl AppState {
    /// Create new application state.
    pub fn new(directory: TopicDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::topics::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
