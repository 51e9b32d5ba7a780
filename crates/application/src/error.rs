//! Application-level errors
//!
//! The pipeline surfaces each fault's message verbatim to the
//! presentation layer, so the user-input and not-found variants carry
//! their full message rather than a prefixed one.

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Invalid user input, detected before any network call
    #[error("{0}")]
    InvalidInput(String),

    /// The geocoder found no match for the place name
    #[error("{0}")]
    PlaceNotFound(String),

    /// Transport-level failure talking to an external service
    #[error("{0}")]
    ExternalService(String),

    /// An external service answered 2xx but with an unexpected shape
    #[error("{0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_is_verbatim() {
        let err = ApplicationError::InvalidInput("Place name cannot be empty.".to_string());
        assert_eq!(err.to_string(), "Place name cannot be empty.");
    }

    #[test]
    fn place_not_found_message_is_verbatim() {
        let err =
            ApplicationError::PlaceNotFound("No matching place found: Nowhere Place".to_string());
        assert_eq!(err.to_string(), "No matching place found: Nowhere Place");
    }

    #[test]
    fn configuration_message_is_prefixed() {
        let err = ApplicationError::Configuration("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }
}
