//! # psc-core
//!
//! Core types for the paysafecard-rs payment client.
//!
//! This crate provides:
//! - `Amount` for monetary values
//! - `Urls` for redirect and notification callback URLs
//! - `PaymentStatus` for the provider-assigned payment lifecycle
//! - `Error` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use psc_core::{Amount, Urls};
//!
//! let amount = Amount::new(20.00, "EUR");
//! let urls = Urls::single("https://shop.example/checkout/return?payment_id={payment_id}");
//! ```

pub mod amount;
pub mod error;
pub mod status;
pub mod urls;

// Re-exports for convenience
pub use amount::Amount;
pub use error::{Error, Result};
pub use status::PaymentStatus;
pub use urls::Urls;
