//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// An upstream provider could not be reached, answered with a non-2xx
    /// status, or returned a body of an unexpected shape
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error came from an upstream provider
    pub const fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_unavailable_message() {
        let err = ApplicationError::UpstreamUnavailable("timed out".to_string());
        assert_eq!(err.to_string(), "Upstream unavailable: timed out");
        assert!(err.is_upstream_unavailable());
    }

    #[test]
    fn configuration_message() {
        let err = ApplicationError::Configuration("bad url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad url");
        assert!(!err.is_upstream_unavailable());
    }
}
