//! Error classification for remote responses
//!
//! Maps a non-success status plus the decoded error envelope into the typed
//! taxonomy. The "not found" status is recognized separately because Read
//! and Delete treat it as an outcome, not an error.

use crate::error::{Error, Result};
use lambdaflow_api::StatusCode;
use lambdaflow_api::types::ErrorEnvelope;
use serde::de::DeserializeOwned;

/// The one status Read and Delete handle specially.
pub fn is_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

/// Classify a non-success response: a decodable error envelope becomes
/// `Error::Remote` with the message passed through unmodified, anything
/// else is a decode failure.
pub fn classify(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            tracing::debug!(
                %status,
                code = %envelope.error.code,
                "remote service reported an error"
            );
            Error::Remote {
                code: envelope.error.code,
                message: envelope.error.message,
                suggestion: envelope.error.suggestion,
            }
        }
        Err(e) => Error::Decode(e),
    }
}

/// Decode a success body into the expected envelope.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}
