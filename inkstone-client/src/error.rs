//! Client error types.

use thiserror::Error;

/// Errors surfaced by [`crate::WorkspaceClient`] calls.
///
/// The client performs no retries; every failure propagates synchronously
/// to the caller, which owns the user-facing translation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("workspace API returned {status} for {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
