//! # Redirect & Notification URLs
//!
//! The three callback URLs a merchant registers with a payment: where the
//! customer lands after approving or aborting, and where the provider posts
//! asynchronous status notifications.

use serde::{Deserialize, Serialize};

/// Success, failure and notification URLs for a client.
///
/// `from_parts` offers the shorthand forms: a single URL used for all three,
/// or one redirect URL plus a separate notification URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urls {
    success_url: String,
    failure_url: String,
    notification_url: String,
}

impl Urls {
    /// Create from three distinct URLs
    pub fn new(
        success_url: impl Into<String>,
        failure_url: impl Into<String>,
        notification_url: impl Into<String>,
    ) -> Self {
        Self {
            success_url: success_url.into(),
            failure_url: failure_url.into(),
            notification_url: notification_url.into(),
        }
    }

    /// Create with a single URL used for success, failure and notification
    pub fn single(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(url.clone(), url.clone(), url)
    }

    /// Create from a variable number of URLs:
    ///
    /// - 1 URL: used for success, failure and notification
    /// - 2 URLs: first for success+failure, second for notification
    /// - 3 URLs: success, failure, notification in order
    ///
    /// Any other count leaves all three fields empty. Callers rely on this
    /// fallback, so it is not an error.
    pub fn from_parts(parts: &[&str]) -> Self {
        match parts {
            [url] => Self::single(*url),
            [redirect, notification] => Self::new(*redirect, *redirect, *notification),
            [success, failure, notification] => Self::new(*success, *failure, *notification),
            _ => Self::default(),
        }
    }

    /// URL the customer is sent to after authorizing the payment
    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    /// URL the customer is sent to after aborting the payment
    pub fn failure_url(&self) -> &str {
        &self.failure_url
    }

    /// Webhook endpoint the provider calls on status changes
    pub fn notification_url(&self) -> &str {
        &self.notification_url
    }

    /// Builder: replace the success URL
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = url.into();
        self
    }

    /// Builder: replace the failure URL
    pub fn with_failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = url.into();
        self
    }

    /// Builder: replace the notification URL
    pub fn with_notification_url(mut self, url: impl Into<String>) -> Self {
        self.notification_url = url.into();
        self
    }
}
