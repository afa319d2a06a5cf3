//! Error types for the core domain.

use thiserror::Error;

/// Errors returned by directory lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No topic with the requested id exists.
    #[error("topic {0} not found")]
    TopicNotFound(u32),
}
