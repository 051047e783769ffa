//! Shared upstream fetcher
//!
//! Single place where outbound HTTP happens. Every failure, including a body
//! that does not decode into the expected shape, is logged here with the URL
//! and cause, then handed back as an [`UpstreamError`].

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::UpstreamError;

/// Query parameters for one upstream request
pub(crate) type QueryParams = Vec<(&'static str, String)>;

/// Timeout applied when a client does not configure one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON-over-HTTP GET with a per-request timeout
///
/// Clones share one connection pool; [`UpstreamFetcher::with_timeout`] gives a
/// handle on the same pool with a different deadline.
#[derive(Debug, Clone)]
pub struct UpstreamFetcher {
    client: Client,
    timeout: Duration,
}

impl UpstreamFetcher {
    /// Create a fetcher with its own connection pool and [`DEFAULT_TIMEOUT`]
    pub fn new() -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .build()
            .map_err(|e| UpstreamError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Same connection pool, different timeout
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            client: self.client.clone(),
            timeout,
        }
    }

    #[cfg(test)]
    const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with `params`, parse the body as JSON and run `decode` on it
    ///
    /// Transport, status, JSON and decode failures are all logged at warn
    /// level before being returned. Query parameters are never logged.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn try_fetch<T, F>(
        &self,
        url: &str,
        params: &[(&str, String)],
        decode: F,
    ) -> Result<T, UpstreamError>
    where
        F: FnOnce(Value) -> Result<T, UpstreamError>,
    {
        let result = self.fetch(url, params).await.and_then(decode);
        if let Err(e) = &result {
            warn!(url = %url, error = %e, "Upstream request failed");
        }
        result
    }

    async fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Value, UpstreamError> {
        debug!(url = %url, "Fetching upstream");

        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::HttpStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(UpstreamError::from_reqwest)
    }
}

/// Append the `apikey` parameter when a key is configured
pub(crate) fn push_api_key(params: &mut QueryParams, api_key: Option<&SecretString>) {
    if let Some(key) = api_key {
        params.push(("apikey", key.expose_secret().to_string()));
    }
}

/// Join a base URL and an endpoint path without doubling slashes
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
