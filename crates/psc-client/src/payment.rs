//! # Payment Lifecycle
//!
//! The payment entity and the operations that drive it through the
//! provider-owned lifecycle: create, capture and find. Every state
//! transition happens server-side; the entity mirrors the most recent
//! response and never advances its own status.

use crate::client::Client;
use psc_core::{Amount, Error, PaymentStatus, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The payment type sent with every create request
const PAYMENT_TYPE: &str = "PAYSAFECARD";

/// A redirect-based paysafecard payment.
///
/// Build one with an [`Amount`] and your own customer id, `create` it to
/// obtain the authorization URL, send the customer there, then `capture`
/// once the provider reports the payment as authorized.
///
/// `status` is `None` until the first server response is merged in; the
/// client never assigns a status locally.
#[derive(Debug, Clone)]
pub struct Payment {
    id: String,
    amount: Amount,
    status: Option<PaymentStatus>,
    customer_id: String,
    auth_url: String,
}

impl Payment {
    /// Create a new, not-yet-initiated payment
    pub fn new(amount: Amount, customer_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            amount,
            status: None,
            customer_id: customer_id.into(),
            auth_url: String::new(),
        }
    }

    /// Initiate the payment with the provider.
    ///
    /// Reads the redirect and notification URLs from the client; they must
    /// have been configured beforehand. On success the provider's response
    /// (id, status, authorization URL) is merged into this payment.
    #[instrument(skip(self, client), fields(customer_id = %self.customer_id))]
    pub async fn create(&mut self, client: &Client) -> Result<()> {
        let urls = client.urls().ok_or_else(|| {
            Error::Configuration(
                "redirect URLs must be configured on the client before creating a payment"
                    .to_string(),
            )
        })?;

        let request = CreatePaymentRequest {
            kind: PAYMENT_TYPE,
            amount: self.amount.value(),
            currency: self.amount.currency(),
            redirect: RedirectRequest {
                success_url: urls.success_url(),
                failure_url: urls.failure_url(),
            },
            notification_url: urls.notification_url(),
            customer: CustomerRequest {
                id: &self.customer_id,
            },
        };

        let details: PaymentResponse = client
            .send_request(Method::POST, "payments", Some(&request))
            .await?;

        info!("Created payment: id={}, status={}", details.id, details.status);

        self.fill(details);
        Ok(())
    }

    /// Capture the authorized payment.
    ///
    /// Only issues the capture call when the in-memory status is
    /// `AUTHORIZED`; in any other state this is a no-op and the payment is
    /// left unchanged.
    #[instrument(skip(self, client), fields(payment_id = %self.id))]
    pub async fn capture(&mut self, client: &Client) -> Result<()> {
        if !self.is_authorized() {
            return Ok(());
        }

        let resource = format!("payments/{}/capture", self.id);
        let details: PaymentResponse = client
            .send_request(Method::POST, &resource, None::<&()>)
            .await?;

        info!("Captured payment: id={}, status={}", details.id, details.status);

        self.fill(details);
        Ok(())
    }

    /// Fetch an existing payment by its provider-assigned id
    #[instrument(skip(client))]
    pub async fn find(id: &str, client: &Client) -> Result<Payment> {
        let resource = format!("payments/{}", id);
        let details: PaymentResponse = client
            .send_request(Method::GET, &resource, None::<&()>)
            .await?;

        let mut payment = Payment::new(Amount::default(), "");
        payment.fill(details);
        Ok(payment)
    }

    /// Merge a provider response into this payment.
    ///
    /// Overwrites id, amount, status, authorization URL and customer id with
    /// whatever the server reported. The authorization URL is empty when the
    /// response carries no redirect block.
    pub fn fill(&mut self, response: PaymentResponse) {
        self.id = response.id;
        self.amount = Amount::new(response.amount, response.currency);
        self.status = Some(PaymentStatus::from_wire(&response.status));
        self.auth_url = response
            .redirect
            .and_then(|redirect| redirect.auth_url)
            .unwrap_or_default();
        self.customer_id = response.customer.id;
    }

    /// The provider-assigned payment id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The payment amount
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// The most recently reported status, if any response has been merged
    pub fn status(&self) -> Option<&PaymentStatus> {
        self.status.as_ref()
    }

    /// The merchant-side customer id
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// The provider's payment page URL. Redirect the customer here to
    /// authorize; empty until a response carrying a redirect block arrives.
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Payment created, customer not yet redirected
    pub fn is_initiated(&self) -> bool {
        matches!(self.status, Some(PaymentStatus::Initiated))
    }

    /// Customer redirected to the provider's payment page
    pub fn is_redirected(&self) -> bool {
        matches!(self.status, Some(PaymentStatus::Redirected))
    }

    /// Customer approved; the payment can be captured
    pub fn is_authorized(&self) -> bool {
        matches!(self.status, Some(PaymentStatus::Authorized))
    }

    /// Payment captured
    pub fn is_successful(&self) -> bool {
        matches!(self.status, Some(PaymentStatus::Success))
    }

    /// Cancelled by either the merchant or the customer
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self.status,
            Some(PaymentStatus::CanceledMerchant | PaymentStatus::CanceledCustomer)
        )
    }

    /// Authorization window elapsed
    pub fn is_expired(&self) -> bool {
        matches!(self.status, Some(PaymentStatus::Expired))
    }

    /// Shorthand for all statuses that indicate a failed payment
    pub fn is_failed(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    /// Shorthand for all statuses that indicate a payment waiting to be
    /// authorized
    pub fn is_waiting(&self) -> bool {
        self.is_initiated() || self.is_redirected()
    }
}

// =============================================================================
// paysafecard API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct CreatePaymentRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    amount: f64,
    currency: &'a str,
    redirect: RedirectRequest<'a>,
    notification_url: &'a str,
    customer: CustomerRequest<'a>,
}

#[derive(Debug, Serialize)]
struct RedirectRequest<'a> {
    success_url: &'a str,
    failure_url: &'a str,
}

#[derive(Debug, Serialize)]
struct CustomerRequest<'a> {
    id: &'a str,
}

/// Payment resource as returned by the provider.
///
/// `customer` is required; a response without it fails deserialization
/// rather than defaulting silently.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub redirect: Option<RedirectResponse>,
    pub customer: CustomerResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedirectResponse {
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub failure_url: Option<String>,
    #[serde(default)]
    pub auth_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerResponse {
    pub id: String,
}
