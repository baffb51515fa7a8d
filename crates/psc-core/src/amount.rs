//! # Amount
//!
//! Monetary amount value type used in payment requests and responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount: numeric value plus ISO 4217 currency code.
///
/// The value is expected to carry at most two decimal places and the currency
/// a valid 3-letter code, but neither is validated here — malformed input is
/// passed through to the wire and surfaces as a provider-side validation
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    value: f64,
    currency: String,
}

impl Amount {
    /// Create a new amount
    pub fn new(value: f64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// The numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The 3-letter currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Builder: replace the value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Builder: replace the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::new(0.0, "EUR")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.currency)
    }
}
