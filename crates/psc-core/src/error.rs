//! # Payment Error Types
//!
//! Typed error handling for the paysafecard-rs client.
//! All fallible operations return `Result<T, Error>`.

use thiserror::Error;

/// Core error type for all paysafecard operations.
///
/// The first four variants mirror the provider's failure classes; messages
/// for translated provider errors embed the numeric error code for diagnosis.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider-side or technical failure (500s, unclassified 400s)
    #[error("API error: {0}")]
    Api(String),

    /// Bad or missing API key
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Unknown resource id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Business-rule rejection tied to a specific payment
    #[error("Payment error: {0}")]
    Payment(String),

    /// Client-side configuration errors (missing key, missing URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns true if the provider rejected the payment itself, as opposed
    /// to the request being malformed or the transport failing.
    pub fn is_payment_rejection(&self) -> bool {
        matches!(self, Error::Payment(_))
    }

    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

/// Result type alias for paysafecard operations
pub type Result<T> = std::result::Result<T, Error>;
