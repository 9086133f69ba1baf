//! HTTP transport for the Lambda GPU cloud API
//!
//! Thin request/response layer: authentication, URL construction and body
//! capture. Interpreting status codes and payloads is the caller's job.

use crate::config::ApiConfig;
use crate::error::Result;
use serde::Serialize;

pub use reqwest::StatusCode;

/// Raw outcome of a single API exchange
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Lambda GPU cloud API client
///
/// Cheap to clone; the credential is captured at construction and never
/// mutated afterwards.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get(&self, path: &str) -> Result<RawResponse> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<RawResponse> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<RawResponse> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<RawResponse> {
        let response = req.basic_auth(&self.api_key, Some("")).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(%status, bytes = body.len(), "API exchange completed");

        Ok(RawResponse { status, body })
    }
}
