//! # psc-client
//!
//! HTTP client for the paysafecard REST API (v1).
//!
//! Wraps the provider's redirect-based payment flow: create a payment, send
//! the customer to the returned authorization URL, then query or capture the
//! payment once the customer returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use psc_client::{Client, Config, Payment};
//! use psc_core::{Amount, Urls};
//!
//! // Set up the API client
//! let config = Config::new("psc_apikey_goes_here")
//!     .with_urls(Urls::single("https://shop.example/return?payment_id={payment_id}"))
//!     .with_testing(true);
//! let client = Client::new(config);
//!
//! // Initiate the payment
//! let mut payment = Payment::new(Amount::new(20.00, "EUR"), "customer123");
//! payment.create(&client).await?;
//!
//! // Redirect the customer to payment.auth_url() to authorize
//! ```
//!
//! ## Completing a payment
//!
//! ```rust,ignore
//! // Find the payment the customer was redirected back from
//! let mut payment = Payment::find(&payment_id, &client).await?;
//!
//! if payment.is_authorized() {
//!     payment.capture(&client).await?;
//! }
//!
//! if payment.is_successful() {
//!     // fulfil the order
//! }
//! ```

pub mod client;
pub mod config;
pub mod payment;

// Re-exports
pub use client::Client;
pub use config::{Config, BASE_URL_PRODUCTION, BASE_URL_TESTING};
pub use payment::{Payment, PaymentResponse};

// Core types, re-exported so most callers only need this crate
pub use psc_core::{Amount, Error, PaymentStatus, Result, Urls};
