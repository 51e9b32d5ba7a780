//! Transit error types

use thiserror::Error;

/// Errors that can occur during transit stop lookups
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the transit service failed
    #[error("Transit connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the transit service failed
    #[error("Transit request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the transit service
    #[error("Transit parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Transit rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Transit request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
