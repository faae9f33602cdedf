use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
