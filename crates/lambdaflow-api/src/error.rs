//! API client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(
        "missing API key: set api_key explicitly or export the LAMBDA_API_KEY environment variable"
    )]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, ApiError>;
