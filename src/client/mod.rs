//! # Agent Monitor API Client
//!
//! Blocking HTTP client for the Agent Monitor REST API. Every domain method is a thin
//! wrapper that builds a path, optional query pairs and an optional JSON body, then hands
//! them to one shared execution path. Responses are returned as `serde_json::Value`
//! exactly as the server sent them.
//!
//! The client is not safe to call from inside an async runtime; it blocks the calling
//! thread for the duration of each request.

mod ai_agents;
mod collections;
mod conversations;
mod groups;
mod system;
mod users;

pub use system::SampleDataSize;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::auth::{AuthMode, Credentials};
use crate::config::{self, ClientConfig};
use crate::error::{ClientError, ClientResult};

/// Query-string pairs attached to a request
pub type QueryPairs = Vec<(&'static str, String)>;

/// HTTP client for the Agent Monitor API
///
/// # Examples
///
/// ```rust
/// use agent_monitor_client::AgentMonitorClient;
///
/// let client = AgentMonitorClient::builder()
///     .base_url("http://localhost:8000/")
///     .api_key("secret", "client-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url(), "http://localhost:8000");
/// ```
#[derive(Clone)]
pub struct AgentMonitorClient {
    http: Client,
    base_url: Url,
    base_url_str: String,
    credentials: Credentials,
}

impl std::fmt::Debug for AgentMonitorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentMonitorClient")
            .field("base_url", &self.base_url_str)
            .field("auth_mode", &self.credentials.mode())
            .field("client_id", &self.credentials.client_id)
            .finish()
    }
}

/// Builder for [`AgentMonitorClient`]
#[derive(Debug, Clone, Default)]
pub struct AgentMonitorClientBuilder {
    base_url: Option<String>,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl AgentMonitorClientBuilder {
    /// Base URL of the API; defaults to `AGENT_MONITOR_API_HOST`/`AGENT_MONITOR_API_PORT`
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bearer token presented as `Authorization: Bearer <token>`
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.credentials.token = Some(token.into());
        self
    }

    /// API-key pair presented as `X-API-KEY` and `X-Client-ID`
    pub fn api_key(
        mut self,
        client_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        self.credentials.client_secret = Some(client_secret.into());
        self.credentials.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.credentials.client_secret = Some(client_secret.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.credentials.client_id = Some(client_id.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Overall request timeout; unset keeps the transport default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ClientResult<AgentMonitorClient> {
        let raw_base_url = self.base_url.unwrap_or_else(config::default_base_url);
        let base_url_str = raw_base_url.trim().trim_end_matches('/').to_string();
        let base_url = Url::parse(&base_url_str).map_err(|e| {
            ClientError::config_error(format!("Invalid base URL '{}': {}", raw_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::config_error(format!(
                "Base URL '{}' cannot carry a path",
                raw_base_url
            )));
        }

        let mut client_builder = Client::builder()
            .user_agent(format!("agent-monitor-client/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let http = client_builder.build().map_err(|e| {
            ClientError::config_error(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            base_url = %base_url_str,
            auth_mode = ?self.credentials.mode(),
            timeout_ms = self.timeout.map(|t| t.as_millis() as u64),
            "Created Agent Monitor API client"
        );

        Ok(AgentMonitorClient {
            http,
            base_url,
            base_url_str,
            credentials: self.credentials,
        })
    }
}

impl AgentMonitorClient {
    /// Create a client from optional connection settings
    ///
    /// A missing base URL falls back to `http://{AGENT_MONITOR_API_HOST}:{AGENT_MONITOR_API_PORT}`
    /// with `localhost` and `8000` as defaults.
    pub fn new(
        base_url: Option<&str>,
        token: Option<&str>,
        client_secret: Option<&str>,
        client_id: Option<&str>,
    ) -> ClientResult<Self> {
        let mut builder = Self::builder().credentials(Credentials {
            token: token.map(str::to_string),
            client_secret: client_secret.map(str::to_string),
            client_id: client_id.map(str::to_string),
        });
        if let Some(base_url) = base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub fn builder() -> AgentMonitorClientBuilder {
        AgentMonitorClientBuilder::default()
    }

    /// Create a client from a loaded [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Self::builder()
            .base_url(config.resolved_base_url())
            .credentials(config.credentials());
        if let Some(timeout_ms) = config.api.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        builder.build()
    }

    /// Normalized base URL (no trailing separator)
    pub fn base_url(&self) -> &str {
        &self.base_url_str
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.credentials.token.as_deref()
    }

    /// Replace the bearer token used for subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.credentials.token = Some(token.into());
    }

    /// Drop the bearer token; API-key credentials, if any, take over
    pub fn clear_token(&mut self) {
        self.credentials.token = None;
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.credentials.mode()
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with username and password
    ///
    /// POST /system/token (form-encoded)
    ///
    /// When the returned payload carries an `access_token`, it becomes the bearer token
    /// for every later request. The payload is returned as-is.
    pub fn login(&mut self, username: &str, password: &str) -> ClientResult<Value> {
        let url = self.endpoint(&["system", "token"])?;
        debug!(url = %url, username = %username, "Requesting access token");

        let request = self
            .http
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&[("username", username), ("password", password)]);

        let token_info = self.send(Method::POST, request)?;

        if let Some(access_token) = token_info.get("access_token").and_then(Value::as_str) {
            self.credentials.token = Some(access_token.to_string());
            info!(username = %username, "Stored access token from login");
        } else {
            debug!("Token response did not contain an access_token");
        }

        Ok(token_info)
    }

    /// Get current authentication status
    ///
    /// GET /system/auth/status
    pub fn get_auth_status(&self) -> ClientResult<Value> {
        self.get(&["system", "auth", "status"], Vec::new())
    }

    // =========================================================================
    // Request execution
    // =========================================================================

    /// Issue a request against an arbitrary endpoint path
    ///
    /// The path is split on `/` and each segment is percent-encoded before being appended
    /// to the base URL. Headers are resolved from the current credentials. Non-success
    /// statuses become [`ClientError::ApiError`]; an empty body yields an empty object.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let url = self.endpoint(&segments)?;
        self.execute(method, url, query, body)
    }

    pub(crate) fn get(&self, segments: &[&str], query: QueryPairs) -> ClientResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(Method::GET, url, &query, None)
    }

    pub(crate) fn post(&self, segments: &[&str], body: Option<&Value>) -> ClientResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(Method::POST, url, &[], body)
    }

    pub(crate) fn put(&self, segments: &[&str], body: &Value) -> ClientResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(Method::PUT, url, &[], Some(body))
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> ClientResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(Method::DELETE, url, &[], None)
    }

    /// Append segments to the base URL, each percent-encoded as one segment
    ///
    /// Empty, `.` and `..` segments are rejected: URL normalization would drop them
    /// and route the request to a different endpoint.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ClientError::invalid_input(format!(
                "'{}' cannot be used as a path segment",
                bad
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::config_error(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url_str
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn execute(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        debug!(
            method = %method,
            url = %url,
            query = ?query,
            has_body = body.is_some(),
            "Sending Agent Monitor API request"
        );

        let mut request = self
            .http
            .request(method.clone(), url)
            .headers(self.credentials.headers()?);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        self.send(method, request)
    }

    fn send(&self, method: Method, request: RequestBuilder) -> ClientResult<Value> {
        let response = request.send().map_err(|e| {
            error!(method = %method, error = %e, "Request failed before a response arrived");
            ClientError::HttpError(e)
        })?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.text();

        if status.is_success() {
            debug!(method = %method, url = %url, status = %status, "Request succeeded");
        }
        response_result(&method, &url, status, body)
    }
}

/// Turn a status and body read into the call's result
///
/// A failed body read on a non-success status still reports the status.
fn response_result<E>(
    method: &Method,
    url: &Url,
    status: StatusCode,
    body: Result<String, E>,
) -> ClientResult<Value>
where
    E: std::fmt::Display,
    ClientError: From<E>,
{
    if status.is_success() {
        return parse_body(&body?);
    }

    let text = body.unwrap_or_else(|e| {
        warn!(method = %method, url = %url, error = %e, "Failed to read error response body");
        String::new()
    });
    error!(method = %method, url = %url, status = %status, body = %text, "Request failed");
    Err(ClientError::api_error(status, text))
}

/// Parse a success body, treating an empty body as an empty object
fn parse_body(text: &str) -> ClientResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}
