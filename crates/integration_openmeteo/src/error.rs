//! Upstream error type

use thiserror::Error;

/// Everything that can go wrong talking to an upstream provider
///
/// Callers treat all variants alike (the provider is unavailable); the
/// distinction exists for logs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// No response within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection or protocol failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// Body was not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Expected top-level object is absent or not an object
    #[error("Response has no `{0}` section")]
    MissingSection(&'static str),

    /// Section is present but does not decode
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl UpstreamError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        // The URL carries the query string, which may include the API key.
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::InvalidJson(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            UpstreamError::HttpStatus(503).to_string(),
            "Upstream returned HTTP 503"
        );
        assert_eq!(
            UpstreamError::MissingSection("current").to_string(),
            "Response has no `current` section"
        );
        assert!(
            UpstreamError::Timeout("deadline".into())
                .to_string()
                .contains("timed out")
        );
    }
}
