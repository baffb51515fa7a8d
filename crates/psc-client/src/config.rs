//! # Client Configuration
//!
//! Configuration for the paysafecard API client.
//! Secrets are loaded from environment variables.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use psc_core::{Error, Urls};
use std::env;

/// Base URL of the provider's test system
pub const BASE_URL_TESTING: &str = "https://apitest.paysafecard.com/v1";

/// Base URL of the provider's production system
pub const BASE_URL_PRODUCTION: &str = "https://api.paysafecard.com/v1";

/// paysafecard API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Merchant API key (psc_...)
    pub api_key: String,

    /// Redirect and notification URLs attached to created payments.
    /// Must be set before `Payment::create` is called.
    pub urls: Option<Urls>,

    /// Whether the client targets the test or production system
    pub testing: bool,

    /// Base URL override (for testing/mocking); takes precedence over the
    /// `testing` flag when set
    pub base_url: Option<String>,
}

impl Config {
    /// Create a config with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            urls: None,
            testing: false,
            base_url: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYSAFECARD_API_KEY`
    ///
    /// Optional env vars:
    /// - `PAYSAFECARD_TEST_MODE` (set to `true` or `1` to target the test system)
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("PAYSAFECARD_API_KEY").map_err(|_| {
            Error::Configuration("PAYSAFECARD_API_KEY not set".to_string())
        })?;

        let testing = env::var("PAYSAFECARD_TEST_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            api_key,
            urls: None,
            testing,
            base_url: None,
        })
    }

    /// Builder: set the redirect and notification URLs
    pub fn with_urls(mut self, urls: Urls) -> Self {
        self.urls = Some(urls);
        self
    }

    /// Builder: target the test or production system
    pub fn with_testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    /// Builder: set a custom API base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Check if the client targets the test system
    pub fn is_testing(&self) -> bool {
        self.testing
    }

    /// The API base URL this config resolves to
    pub fn api_url(&self) -> &str {
        if let Some(ref url) = self.base_url {
            return url;
        }
        if self.testing {
            BASE_URL_TESTING
        } else {
            BASE_URL_PRODUCTION
        }
    }

    /// Get the authorization header value.
    ///
    /// HTTP Basic with the API key as username and an empty password, which
    /// the provider expects as the bare key, base64-encoded.
    pub fn auth_header(&self) -> String {
        format!("Basic {}", BASE64.encode(&self.api_key))
    }
}
