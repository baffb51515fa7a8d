//! # Payment Status
//!
//! The provider-assigned lifecycle status of a payment. The client never sets
//! a status itself; every value comes from a server response.

use std::fmt;

/// Lifecycle status of a payment as reported by the provider.
///
/// Statuses the provider may introduce later are carried as
/// `Unknown` rather than dropped, so callers can still log and branch on
/// the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Payment created, customer not yet redirected
    Initiated,
    /// Customer redirected to the provider's payment page
    Redirected,
    /// Customer approved; payment can be captured
    Authorized,
    /// Payment captured
    Success,
    /// Cancelled by the merchant
    CanceledMerchant,
    /// Cancelled by the customer
    CanceledCustomer,
    /// Authorization window elapsed
    Expired,
    /// Status value not known to this client (passthrough)
    Unknown(String),
}

impl PaymentStatus {
    /// Parse a status from its wire representation
    pub fn from_wire(value: &str) -> Self {
        match value {
            "INITIATED" => PaymentStatus::Initiated,
            "REDIRECTED" => PaymentStatus::Redirected,
            "AUTHORIZED" => PaymentStatus::Authorized,
            "SUCCESS" => PaymentStatus::Success,
            "CANCELED_MERCHANT" => PaymentStatus::CanceledMerchant,
            "CANCELED_CUSTOMER" => PaymentStatus::CanceledCustomer,
            "EXPIRED" => PaymentStatus::Expired,
            other => PaymentStatus::Unknown(other.to_string()),
        }
    }

    /// The wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Initiated => "INITIATED",
            PaymentStatus::Redirected => "REDIRECTED",
            PaymentStatus::Authorized => "AUTHORIZED",
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::CanceledMerchant => "CANCELED_MERCHANT",
            PaymentStatus::CanceledCustomer => "CANCELED_CUSTOMER",
            PaymentStatus::Expired => "EXPIRED",
            PaymentStatus::Unknown(other) => other,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
