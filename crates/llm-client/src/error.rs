//! Completion error types.

use thiserror::Error;

/// Failure of one completion request. Never retried.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Transport failure or non-success response from the completion API.
    #[error("{0}")]
    Api(String),
    /// The request could not be built from the given messages.
    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),
}
