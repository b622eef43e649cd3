//! Transport layer
//!
//! The selector only needs one capability from the network: an authenticated
//! JSON GET. It lives behind a trait so tests can substitute canned responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Media type recommended by the hosting API
const GITHUB_JSON: &str = "application/vnd.github+json";

/// REST API version pinned for the runners endpoint
const API_VERSION: &str = "2022-11-28";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw result of a JSON GET
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    /// HTTP status code
    pub status: u16,

    /// Parsed body, if the response had one
    pub body: Option<Value>,
}

impl JsonResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }
}

/// Authenticated JSON GET capability
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// Fetches `url` with `Authorization: Bearer <token>`
    ///
    /// Non-success statuses are not errors at this layer; they come back in
    /// [`JsonResponse::status`] for the caller to judge.
    async fn get_json(&self, url: &str, token: &str) -> Result<JsonResponse>;
}

/// reqwest implementation of [`JsonTransport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("runner-select/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client
    ///
    /// The caller is responsible for any default headers the API requires.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn get_json(&self, url: &str, token: &str) -> Result<JsonResponse> {
        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("GET {} returned {} ({} bytes)", url, status, text.len());

        let body = parse_body(status.is_success(), &text)?;
        Ok(JsonResponse::new(status.as_u16(), body))
    }
}

/// Interprets a response body
///
/// Error pages are not always JSON, so an unparseable body on a failed
/// request is dropped rather than reported.
fn parse_body(success: bool, text: &str) -> Result<Option<Value>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(text) {
        Ok(value) => Ok(Some(value)),
        Err(_) if !success => Ok(None),
        Err(e) => Err(ClientError::ParseError(format!(
            "Failed to parse JSON response: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RUNNERS_PATH: &str = "/repos/octo-org/octo-repo/actions/runners";

    fn runners_url(server: &MockServer) -> String {
        format!("{}{}", server.uri(), RUNNERS_PATH)
    }

    #[test]
    fn test_transport_creation() {
        assert!(HttpTransport::new().is_ok());
        assert!(HttpTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_parse_body_empty() {
        assert_eq!(parse_body(true, "").unwrap(), None);
        assert_eq!(parse_body(false, "  \n").unwrap(), None);
    }

    #[test]
    fn test_parse_body_json() {
        let body = parse_body(true, r#"{"runners": []}"#).unwrap();
        assert_eq!(body, Some(json!({ "runners": [] })));
    }

    #[test]
    fn test_parse_body_error_page_is_dropped() {
        assert_eq!(parse_body(false, "<html>Bad gateway</html>").unwrap(), None);
    }

    #[test]
    fn test_parse_body_invalid_json_on_success() {
        let err = parse_body(true, "not json").unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_get_json_sends_auth_and_api_headers() {
        let server = MockServer::start().await;
        let body = json!({
            "total_count": 1,
            "runners": [
                { "status": "online", "labels": [ { "name": "self-hosted" } ] }
            ]
        });
        Mock::given(method("GET"))
            .and(path(RUNNERS_PATH))
            .and(header("authorization", "Bearer secret-token"))
            .and(header("accept", GITHUB_JSON))
            .and(header("x-github-api-version", API_VERSION))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let response = transport
            .get_json(&runners_url(&server), "secret-token")
            .await
            .unwrap();

        assert_eq!(response, JsonResponse::new(200, Some(body)));
    }

    #[tokio::test]
    async fn test_get_json_not_found_html_has_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(RUNNERS_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let response = transport
            .get_json(&runners_url(&server), "secret-token")
            .await
            .unwrap();

        assert_eq!(response, JsonResponse::new(404, None));
    }

    #[tokio::test]
    async fn test_get_json_invalid_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(RUNNERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .get_json(&runners_url(&server), "secret-token")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
