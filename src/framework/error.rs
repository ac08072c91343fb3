//! # Framework Errors
//!
//! Transport-level errors returned by a [`ResourceClient`](crate::framework::ResourceClient).
//! Higher layers never reinterpret these; they are passed through unchanged.

/// Errors that can occur while talking to a resource collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Server error, status code: {status}, error code: {code}, message: {description}")]
    Server {
        status: u16,
        code: u32,
        description: String,
    },
}
