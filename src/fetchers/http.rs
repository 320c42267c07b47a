//! HTTP fetcher backed by reqwest

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::fetcher::Fetcher;
use crate::{PaddockError, Result};

/// Fetcher that issues GET requests against the configured base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Create a fetcher from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(PaddockError::config("api.base_url must not be empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            PaddockError::config(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request_error(&self, url: &str, err: reqwest::Error) -> PaddockError {
        match self.timeout {
            Some(duration) if err.is_timeout() => PaddockError::Timeout { duration },
            _ => {
                let reason = err.to_string();
                PaddockError::transport_with_source(url, reason, Box::new(err))
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        debug!(url = %url, params = params.len(), "GET");

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| self.request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaddockError::http(status.as_u16(), url));
        }

        let body = response.text().await.map_err(|e| self.request_error(&url, e))?;
        trace!(url = %url, bytes = body.len(), "Response body received");

        serde_json::from_str(&body).map_err(|e| PaddockError::Decode { url, details: e.to_string() })
    }
}
