//! Reconciliation error taxonomy
//!
//! Every variant is fatal to the current operation and is returned to the
//! caller as-is; nothing is retried here. The two non-error outcomes
//! ("resource is gone" on read, "already gone" on delete) live in
//! [`crate::controller`], not in this enum.

use lambdaflow_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A precondition failed locally, before any network call was made.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// The API call itself failed (DNS, connection refused, cancellation).
    #[error("transport error: {0}")]
    Transport(#[from] ApiError),

    /// The response body did not match the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service returned a decodable error envelope.
    #[error("remote error {code}: {message}")]
    Remote {
        code: String,
        message: String,
        suggestion: Option<String>,
    },

    /// The service returned the wrong number of identifiers for a
    /// single-resource request.
    #[error("expected {expected} instance id(s) in response, got {got}")]
    Cardinality { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
