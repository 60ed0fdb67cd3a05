//! Tenant-aware API client
//!
//! One consistent way to call the backend across every resource type:
//! per-call base-URL resolution, bearer authorization, write-boundary key
//! normalization, and uniform success/error handling. Tenant and token
//! context is passed explicitly per call; nothing is cached between calls.

use std::time::Duration;

use classbridge_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use classbridge_domain::Page;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::auth::usable_token;
use super::errors::ApiError;
use super::tenant::resolve_base_url;
use crate::case::to_snake_case;
use crate::http::HttpClient;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Fallback base URL used when a call supplies no tenant domain
    pub default_base_url: String,
    /// Optional transport timeout; unset means the caller accepts unbounded
    /// latency or cancels the call itself
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            default_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Describes one logical operation against one resource endpoint.
///
/// Paths are fixed, versioned resource paths with a trailing slash
/// (`/plans/unit-plans/`), matching the backend's routing convention.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    requires_auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, requires_auth: false }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Mark this operation as requiring a usable access token. Calls without
    /// one fail before any network I/O.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Append a query parameter (percent-encoded when the URL is built).
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Object keys are rewritten to snake_case here, at
    /// the write boundary; the conversion is idempotent so serde-derived
    /// snake_case structs and camelCase `json!` payloads behave identically.
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::Config(format!("failed to serialize request body: {err}")))?;
        self.body = Some(to_snake_case(value));
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

/// Tenant-aware API client
pub struct ApiClient {
    http: HttpClient,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying transport cannot be built
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Resolve the base URL for one call.
    ///
    /// A non-blank tenant domain wins over the configured default; the
    /// result never ends with a trailing slash.
    pub fn resolve_base_url(&self, tenant_domain: Option<&str>) -> String {
        resolve_base_url(tenant_domain, &self.config.default_base_url)
    }

    /// Build request headers.
    ///
    /// `Authorization: Bearer <token>` is included only for a usable
    /// (non-blank) token; `extra` headers pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the token contains characters that are
    /// invalid in an HTTP header
    pub fn build_headers(
        access_token: Option<&str>,
        extra: Option<&HeaderMap>,
    ) -> Result<HeaderMap, ApiError> {
        let mut headers = extra.cloned().unwrap_or_default();
        if let Some(token) = usable_token(access_token) {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ApiError::Config("access token contains invalid header characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Execute one request and deserialize the response.
    ///
    /// Exactly one network call per invocation; no retries, no fallback
    /// values. An authenticated descriptor without a usable token fails
    /// immediately with [`ApiError::NoToken`] and performs no I/O.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method, path = %descriptor.path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        if descriptor.requires_auth && usable_token(access_token).is_none() {
            debug!("rejecting authenticated request without a usable token");
            return Err(ApiError::NoToken);
        }

        let base_url = self.resolve_base_url(tenant_domain);
        let url = format!("{}{}", base_url, descriptor.path);

        let headers = Self::build_headers(access_token, None)?;
        let mut builder = self.http.request(descriptor.method.clone(), &url).headers(headers);

        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }

        if let Some(body) = &descriptor.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let text = response.text().await?;
        let result = if text.trim().is_empty() {
            // 204 and friends: only types that accept null (e.g. `()`) fit
            serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::MalformedResponse(format!(
                    "no content response ({}) but a body was expected",
                    status.as_u16()
                ))
            })?
        } else {
            serde_json::from_str(&text)
                .map_err(|err| ApiError::MalformedResponse(format!("invalid JSON body: {err}")))?
        };

        debug!(status = status.as_u16(), "request successful");
        Ok(result)
    }

    /// Execute a list request and unwrap the paginated envelope.
    ///
    /// A missing `results` key yields an empty vector, never an error.
    pub async fn request_list<T: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let page: Page<T> = self.request(descriptor, tenant_domain, access_token).await?;
        Ok(page.results)
    }

    /// Build the error for a non-2xx response, extracting a human-readable
    /// message from a JSON `message`/`detail` field when the backend sent
    /// one, degrading to raw text and then to the canonical status reason.
    async fn status_error(status: StatusCode, response: Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let details: Option<Value> = serde_json::from_str(&text).ok();

        let message = details
            .as_ref()
            .and_then(|d| d.get("message").or_else(|| d.get("detail")))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            })
            .unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_owned()
            });

        ApiError::Status { status: status.as_u16(), message, details }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    transport: Option<HttpClient>,
}

impl ApiClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Supply a pre-built transport (e.g. with caller-owned timeout policy)
    pub fn transport(mut self, http: HttpClient) -> Self {
        self.transport = Some(http);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if transport construction fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        match self.transport {
            Some(http) => Ok(ApiClient { http, config }),
            None => ApiClient::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiClientConfig { default_base_url: server.uri(), ..Default::default() };
        ApiClient::new(config).expect("api client")
    }

    #[test]
    fn build_headers_omits_authorization_without_token() {
        let headers = ApiClient::build_headers(None, None).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());

        let headers = ApiClient::build_headers(Some("   "), None).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn build_headers_includes_bearer_token_and_extras() {
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let headers = ApiClient::build_headers(Some("abc123"), Some(&extra)).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        // Inputs are not mutated.
        assert!(extra.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn with_body_snake_cases_object_keys() {
        let descriptor = RequestDescriptor::post("/assignments/")
            .with_body(&json!({"dueDate": "2024-01-01", "maxScore": 100}))
            .unwrap();

        assert_eq!(
            descriptor.body,
            Some(json!({"due_date": "2024-01-01", "max_score": 100}))
        );
    }

    #[tokio::test]
    async fn authenticated_descriptor_without_token_makes_no_network_call() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let descriptor = RequestDescriptor::get("/assignments/").authenticated();
        let result: Result<Value, ApiError> = client.request(&descriptor, None, Some("")).await;

        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail_code(), Some("NO_TOKEN"));

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_preserved_with_detail_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plans/unit-plans/9/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let descriptor = RequestDescriptor::get("/plans/unit-plans/9/");
        let result: Result<Value, ApiError> = client.request(&descriptor, None, None).await;

        match result {
            Err(ApiError::Status { status, message, details }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found");
                assert_eq!(details, Some(json!({"detail": "Not found"})));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_degrades_to_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let descriptor = RequestDescriptor::get("/plans/unit-plans/");
        let result: Result<Value, ApiError> = client.request(&descriptor, None, None).await;

        match result {
            Err(ApiError::Status { status, message, details }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
                assert!(details.is_none());
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_canonical_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(403)).mount(&server).await;

        let client = client_for(&server);
        let descriptor = RequestDescriptor::get("/plans/unit-plans/");
        let result: Result<Value, ApiError> = client.request(&descriptor, None, None).await;

        match result {
            Err(ApiError::Status { status, message, .. }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn list_envelope_without_results_yields_empty_vec() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let descriptor = RequestDescriptor::get("/plans/unit-plans/");
        let items: Vec<Value> = client.request_list(&descriptor, None, None).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn malformed_success_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let descriptor = RequestDescriptor::get("/plans/unit-plans/");
        let result: Result<Value, ApiError> = client.request(&descriptor, None, None).await;

        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn tenant_domain_overrides_default_base_url() {
        let tenant_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plans/unit-plans/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&tenant_server)
            .await;

        // Default points somewhere unreachable; the tenant domain must win.
        let config = ApiClientConfig {
            default_base_url: "http://127.0.0.1:1".to_owned(),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();

        let descriptor = RequestDescriptor::get("/plans/unit-plans/");
        let tenant = format!("{}/", tenant_server.uri());
        let items: Vec<Value> =
            client.request_list(&descriptor, Some(&tenant), None).await.unwrap();

        assert!(items.is_empty());
    }
}
