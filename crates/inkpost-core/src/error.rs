//! Client-level error types.

use thiserror::Error;

/// Store-level errors - failures of a single remote call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed store response: {0}")]
    Decode(String),
}

/// Lifecycle errors - the two ways a user action can fail.
///
/// Neither is fatal: the controller has already surfaced the failure to the
/// user by the time one of these is returned.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to create post: {0}")]
    CreationFailure(#[source] StoreError),

    #[error("Failed to load posts: {0}")]
    LoadFailure(#[source] StoreError),
}
