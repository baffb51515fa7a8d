//! # paysafecard API Client
//!
//! Single point of contact with the provider's REST API: request building,
//! authentication, endpoint resolution and error translation.

use crate::config::Config;
use psc_core::{Error, Result, Urls};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// HTTP client for the paysafecard REST API.
///
/// Holds the merchant credentials and the callback URLs attached to created
/// payments, and translates provider error responses into [`Error`] values.
/// Each operation issues exactly one outbound call; there is no retry logic.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self::new(config))
    }

    /// The API base URL (test or production system per the config)
    pub fn api_url(&self) -> &str {
        self.config.api_url()
    }

    /// The full request URL for a resource path (e.g. `payments`)
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_url(), resource)
    }

    /// The redirect and notification URLs configured for this client
    pub fn urls(&self) -> Option<&Urls> {
        self.config.urls.as_ref()
    }

    /// Check if the client targets the test system
    pub fn is_testing(&self) -> bool {
        self.config.is_testing()
    }

    /// The headers attached to every API request
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.config.auth_header())
                .expect("base64 credential is valid ASCII"),
        );
        headers
    }

    /// Send a request to the provider and parse the response body.
    ///
    /// A status code above 200 is translated into a typed error; anything at
    /// or below 200 is treated as success. The provider only ever answers
    /// successful calls with 200.
    #[instrument(skip(self, body))]
    pub async fn send_request<B, T>(
        &self,
        method: Method,
        resource: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resource_url(resource);
        debug!("sending {} {}", method, url);

        let mut request = self.http.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if status.as_u16() > 200 {
            error!("paysafecard API error: status={}, body={}", status, text);
            return Err(translate_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::Serialization(format!("Failed to parse paysafecard response: {}", e))
        })
    }
}

/// Error fields the provider includes in 400 responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    number: Option<i64>,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Translate a non-success provider response into a typed error.
///
/// Dispatches on the HTTP status and, for 400, on the provider-supplied
/// `number` field in the body.
fn translate_error(status: u16, body: &str) -> Error {
    match status {
        500 => Error::Api("Technical error on Paysafecard's end".to_string()),
        401 => Error::Authentication(
            "Authentication failed due to missing or invalid API key (10008)".to_string(),
        ),
        404 => Error::NotFound("Resource not found".to_string()),
        400 => {
            let details: ErrorBody = serde_json::from_str(body).unwrap_or_default();
            match details.number {
                Some(10028) => Error::Api(format!(
                    "Invalid request parameter: {} {} (10028)",
                    details.param.unwrap_or_default(),
                    details.message.unwrap_or_default()
                )),
                Some(2001) => Error::Payment("Transaction already exists (2001)".to_string()),
                Some(2017) => Error::Payment(
                    "This payment is not capturable at the moment (2017)".to_string(),
                ),
                Some(3001) => Error::Payment("Merchant is not active (3001)".to_string()),
                Some(3007) => Error::Payment(
                    "Debit attempt after expiry of dispo time window (3007)".to_string(),
                ),
                number => Error::Api(format!(
                    "Unknown error ({})",
                    number.map(|n| n.to_string()).unwrap_or_default()
                )),
            }
        }
        other => Error::Api(format!("Unexpected HTTP status {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Client {
        Client::new(Config::new("test").with_base_url(server.uri()))
    }

    #[test]
    fn test_resource_url() {
        let client = Client::new(Config::new("psc_key").with_testing(true));
        assert_eq!(
            client.resource_url("payments"),
            "https://apitest.paysafecard.com/v1/payments"
        );
    }

    #[test]
    fn test_headers() {
        let client = Client::new(Config::new("test"));
        let headers = client.headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic dGVzdA==");
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/pay1"))
            .and(header("Authorization", "Basic dGVzdA=="))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay1"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body: Value = client
            .send_request(Method::GET, "payments/pay1", None::<&()>)
            .await
            .unwrap();
        assert_eq!(body["id"], "pay1");
    }

    #[tokio::test]
    async fn test_400_payment_error_by_number() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/pay1/capture"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"number": 2017})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send_request::<(), Value>(Method::POST, "payments/pay1/capture", None)
            .await
            .unwrap_err();
        match err {
            Error::Payment(message) => assert!(message.contains("2017")),
            other => panic!("expected payment error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_400_parameter_error_interpolates_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "number": 10028,
                "param": "currency",
                "message": "must be a valid ISO 4217 code"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send_request::<(), Value>(Method::POST, "payments", None)
            .await
            .unwrap_err();
        match err {
            Error::Api(message) => {
                assert!(message.contains("currency"));
                assert!(message.contains("must be a valid ISO 4217 code"));
                assert!(message.contains("10028"));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_400_unmapped_number_is_unknown_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"number": 4042})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send_request::<(), Value>(Method::POST, "payments", None)
            .await
            .unwrap_err();
        match err {
            Error::Api(message) => assert!(message.contains("Unknown error (4042)")),
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_401_is_authentication_error_regardless_of_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send_request::<(), Value>(Method::GET, "payments/pay1", None)
            .await
            .unwrap_err();
        match err {
            Error::Authentication(message) => assert!(message.contains("10008")),
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_404_and_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client
                .send_request::<(), Value>(Method::GET, "payments/missing", None)
                .await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            client
                .send_request::<(), Value>(Method::POST, "payments", None)
                .await,
            Err(Error::Api(_))
        ));
    }

    #[tokio::test]
    async fn test_unexpected_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(418))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .send_request::<(), Value>(Method::GET, "payments/pay1", None)
            .await
            .unwrap_err();
        match err {
            Error::Api(message) => assert!(message.contains("418")),
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .send_request::<(), Value>(Method::GET, "payments/pay1", None)
            .await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
