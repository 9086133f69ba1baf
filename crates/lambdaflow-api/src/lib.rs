//! Lambda GPU Cloud API client
//!
//! Raw HTTP plumbing for the Lambda cloud provisioning API: credential
//! resolution, basic-auth transport and the wire types of the service.
//! This crate deliberately does not interpret responses; the reconciliation
//! engine in `lambdaflow-reconcile` owns status classification and state
//! mapping.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-exports
pub use client::{ApiClient, RawResponse, StatusCode};
pub use config::{ApiConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
