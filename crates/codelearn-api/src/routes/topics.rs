//! Topic directory endpoints.

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use codelearn_core::Topic;

use crate::error::AppError;
use crate::AppState;

/// Topic routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/topics", get(list_topics))
        .route("/api/topics/:id", get(get_topic))
}

/// List every topic, in definition order.
async fn list_topics(State(state): State<AppState>) -> Json<Vec<Topic>> {
    Json(state.directory.topics().to_vec())
}

/// Look up a single topic by id.
///
/// The id segment is parsed here rather than by the extractor so that
/// non-numeric input surfaces as the same 404 as an unknown id.
async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Topic>, AppError> {
    let id: u32 = id.parse().map_err(|_| AppError::TopicNotFound)?;
    let topic = state.directory.get(id)?;
    Ok(Json(topic.clone()))
}
