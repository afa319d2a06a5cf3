//! Health check endpoint.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/test", get(test_check))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    /// Static readiness message.
    pub message: String,
}

/// Health check handler.
async fn test_check() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend server is running!".to_string(),
    })
}
