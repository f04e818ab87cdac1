//! Shared request/response layer
//!
//! [`Transport`] owns the HTTP client, API root URL, version header and token
//! provider. It performs one round trip per call and hands back the status
//! and parsed JSON body; interpreting the status is the caller's job through
//! the [`TransportResponse`] helpers.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use squarely_domain::constants::{API_PATH_PREFIX, API_VERSION_HEADER};
use squarely_domain::Page;
use tracing::{debug, warn};
use url::Url;

use super::client::HttpClient;
use super::route::Route;
use crate::api::auth::AccessTokenProvider;
use crate::api::errors::ApiError;
use crate::errors::IntoApiError;
use crate::logging::log_request_failure;

/// Response key holding the pagination cursor.
const CURSOR_KEY: &str = "cursor";

pub struct Transport {
    http: HttpClient,
    api_root: Url,
    api_version: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("api_root", &self.api_root.as_str())
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// # Errors
    /// Returns `ApiError::Config` when `base_url` is not an absolute http(s)
    /// URL.
    pub fn new(
        http: HttpClient,
        base_url: &str,
        api_version: impl Into<String>,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        Ok(Self { http, api_root: api_root(base_url)?, api_version: api_version.into(), auth })
    }

    /// URL every route is resolved against, ending in `/v2/`.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Issue one request and parse the response body.
    ///
    /// HTTP error statuses are returned as `Ok`; only failures that produce
    /// no response (or an unreadable one) are `Err`.
    pub async fn send(
        &self,
        method: Method,
        route: &Route,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<TransportResponse, ApiError> {
        let url = route.url(&self.api_root)?;
        let token = self.auth.access_token().await?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(token.expose())
            .header(API_VERSION_HEADER, &self.api_version)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let result = self.round_trip(request).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let (status, body) = result.inspect_err(|err| log_request_failure(&method, route, err))?;

        if status.is_success() {
            debug!(%method, route = %route, status = status.as_u16(), elapsed_ms, "request completed");
        } else {
            warn!(%method, route = %route, status = status.as_u16(), elapsed_ms, "request returned error status");
        }

        Ok(TransportResponse { status, body })
    }

    async fn round_trip(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Map<String, Value>), ApiError> {
        let response = self.http.send(request).await?;
        let status = response.status();
        let bytes =
            response.bytes().await.map_err(|err| err.into_api_error(self.http.timeout()))?;
        Ok((status, parse_body(status, &bytes)?))
    }
}

fn api_root(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|err| ApiError::Config(format!("invalid base URL '{base_url}': {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!("base URL must be http or https: '{base_url}'")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(API_PATH_PREFIX)
        .map_err(|err| ApiError::Config(format!("invalid base URL '{base_url}': {err}")))
}

fn parse_body(status: StatusCode, bytes: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) if status.is_success() => {
            Err(ApiError::InvalidResponse("response body is not a JSON object".into()))
        }
        Err(err) if status.is_success() => {
            Err(ApiError::InvalidResponse(format!("response body is not valid JSON: {err}")))
        }
        // Error pages from proxies are not JSON; the status alone classifies them.
        _ => Ok(Map::new()),
    }
}

/// Serialize a request payload.
pub fn json_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|err| ApiError::InvalidArgument(format!("failed to serialize request: {err}")))
}

/// Status and JSON object body of one response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Map<String, Value>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Pass successful responses through, classify the rest.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }

    /// Deserialize the value under `key`, e.g. `customer`.
    pub fn into_record<T: DeserializeOwned>(self, key: &str) -> Result<T, ApiError> {
        let mut body = self.error_for_status()?.body;
        let value = body
            .remove(key)
            .ok_or_else(|| ApiError::InvalidResponse(format!("response has no '{key}' field")))?;
        serde_json::from_value(value)
            .map_err(|err| ApiError::InvalidResponse(format!("malformed '{key}': {err}")))
    }

    /// Deserialize the whole body.
    pub fn into_value<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let body = self.error_for_status()?.body;
        Ok(serde_json::from_value(Value::Object(body))?)
    }

    /// Read a page of records under `key` plus the `cursor` field.
    ///
    /// Square omits empty arrays, so a missing `key` is an empty page.
    pub fn into_page<T: DeserializeOwned>(self, key: &str) -> Result<Page<T>, ApiError> {
        let mut body = self.error_for_status()?.body;

        let items = match body.remove(key) {
            Some(Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value)
                .map_err(|err| ApiError::InvalidResponse(format!("malformed '{key}': {err}")))?,
        };
        let cursor = match body.remove(CURSOR_KEY) {
            Some(Value::String(cursor)) => Some(cursor),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(ApiError::InvalidResponse(format!("cursor is not a string: {other}")))
            }
        };

        Ok(Page::new(items, cursor))
    }

    /// Succeed on any 2xx, ignoring the body.
    pub fn into_empty(self) -> Result<(), ApiError> {
        self.error_for_status().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;
    use squarely_domain::SecretToken;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::auth::StaticTokenProvider;
    use crate::api::errors::ApiErrorKind;

    fn transport(base_url: &str) -> Transport {
        let http = HttpClient::builder().no_proxy().build().unwrap();
        Transport::new(http, base_url, "2024-01-18", Arc::new(StaticTokenProvider::new("tok")))
            .unwrap()
    }

    fn response(status: u16, body: Value) -> TransportResponse {
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        TransportResponse { status: StatusCode::from_u16(status).unwrap(), body }
    }

    #[test]
    fn api_root_appends_version_prefix() {
        assert_eq!(api_root("http://127.0.0.1:8080").unwrap().as_str(), "http://127.0.0.1:8080/v2/");
        assert_eq!(
            api_root("https://proxy.example.com/square").unwrap().as_str(),
            "https://proxy.example.com/square/v2/"
        );
        assert!(matches!(api_root("not a url"), Err(ApiError::Config(_))));
        assert!(matches!(api_root("ftp://example.com"), Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn send_attaches_headers_query_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/customers/search"))
            .and(header("Authorization", "Bearer tok"))
            .and(header("Square-Version", "2024-01-18"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .and(query_param("probe", "1"))
            .and(body_json(json!({"limit": 5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server.uri());
        let response = transport
            .send(
                Method::POST,
                &Route::fixed("customers/search"),
                &[("probe", "1".to_string())],
                Some(&json!({"limit": 5})),
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.get("customers"), Some(&json!([])));
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/customers/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"category": "INVALID_REQUEST_ERROR", "code": "NOT_FOUND"}]
            })))
            .mount(&server)
            .await;

        let transport = transport(&server.uri());
        let route = Route::format("customers/{id}", &[("id", "missing")]).unwrap();
        let response = transport.send(Method::GET, &route, &[], None).await.unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        let error = response.into_record::<Value>("customer").unwrap_err();
        assert_eq!(error.kind(), ApiErrorKind::NotFound);
    }

    #[tokio::test]
    async fn empty_body_parses_to_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = transport(&server.uri());
        let response =
            transport.send(Method::DELETE, &Route::fixed("customers/C1"), &[], None).await.unwrap();

        assert!(response.body.is_empty());
        assert!(response.into_empty().is_ok());
    }

    #[tokio::test]
    async fn non_object_success_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&server)
            .await;

        let transport = transport(&server.uri());
        let result = transport.send(Method::GET, &Route::fixed("customers"), &[], None).await;
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn html_error_page_maps_by_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let transport = transport(&server.uri());
        let response =
            transport.send(Method::GET, &Route::fixed("customers"), &[], None).await.unwrap();
        assert_eq!(response.into_empty().unwrap_err().kind(), ApiErrorKind::Server);
    }

    #[tokio::test]
    async fn token_provider_failure_stops_the_request() {
        struct FailingProvider;

        #[async_trait]
        impl AccessTokenProvider for FailingProvider {
            async fn access_token(&self) -> Result<SecretToken, ApiError> {
                Err(ApiError::Config("no token".into()))
            }
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let http = HttpClient::builder().no_proxy().build().unwrap();
        let transport =
            Transport::new(http, &server.uri(), "2024-01-18", Arc::new(FailingProvider)).unwrap();
        let result = transport.send(Method::GET, &Route::fixed("customers"), &[], None).await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn into_page_reads_items_and_cursor() {
        let page: Page<Value> =
            response(200, json!({"groups": [{"id": "G1"}], "cursor": "next"})).into_page("groups").unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.next_cursor(), Some("next"));

        let empty: Page<Value> = response(200, json!({})).into_page("groups").unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_last());
    }

    #[test]
    fn into_record_requires_key() {
        let result = response(200, json!({"other": {}})).into_record::<Value>("customer");
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn into_value_classifies_error_status() {
        let result = response(401, json!({})).into_value::<Value>();
        assert!(matches!(result, Err(ApiError::Authentication(_))));
    }
}
