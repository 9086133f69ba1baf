//! Client configuration and credential resolution

use crate::error::{ApiError, Result};

/// Production endpoint of the Lambda GPU cloud API.
pub const DEFAULT_BASE_URL: &str = "https://cloud.lambdalabs.com/api/v1";

/// Environment variable consulted when no explicit API key is given.
pub const API_KEY_ENV: &str = "LAMBDA_API_KEY";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key, sent as the basic-auth username with an empty password
    pub api_key: String,

    /// Base URL of the API (overridable for tests)
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Resolve the API key: an explicit value wins, otherwise fall back to
    /// the `LAMBDA_API_KEY` environment variable. Neither present is a
    /// fatal configuration error.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let api_key = match explicit {
            Some(key) if !key.is_empty() => key,
            _ => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ApiError::MissingApiKey)?,
        };
        Ok(Self::new(api_key))
    }

    /// Override the base URL (used by tests to point at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins_over_env() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let config = ApiConfig::resolve(Some("explicit".to_string())).unwrap();
            assert_eq!(config.api_key, "explicit");
        });
    }

    #[test]
    fn test_env_fallback() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let config = ApiConfig::resolve(None).unwrap();
            assert_eq!(config.api_key, "from-env");
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
        });
    }

    #[test]
    fn test_missing_key_is_fatal() {
        temp_env::with_var(API_KEY_ENV, None::<&str>, || {
            let err = ApiConfig::resolve(None).unwrap_err();
            assert!(matches!(err, ApiError::MissingApiKey));
        });
    }

    #[test]
    fn test_empty_explicit_key_falls_back() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let config = ApiConfig::resolve(Some(String::new())).unwrap();
            assert_eq!(config.api_key, "from-env");
        });
    }
}
