//! Error handling for the API server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codelearn_core::DirectoryError;

/// Plain-text body sent with the not-found response.
pub const TOPIC_NOT_FOUND_BODY: &str = "Topic not found.";

/// Application error type.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    /// Requested topic does not exist, or the id segment did not parse
    /// as an integer.
    TopicNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::TopicNotFound => {
                (StatusCode::NOT_FOUND, TOPIC_NOT_FOUND_BODY).into_response()
            }
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::TopicNotFound(_) => AppError::TopicNotFound,
        }
    }
}
