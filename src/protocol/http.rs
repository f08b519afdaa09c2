// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the WiRCU cloud API.

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde_json::{Map, Value};

use crate::error::{ApiError, ConnectionError, Error};
use crate::protocol::{Envelope, Method, Protocol};

const JSON_MIME: &str = "application/json";

// ============================================================================
// Credentials
// ============================================================================

/// Unit credentials: the WiRCU MAC address and its PIN.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    mac: String,
    password: String,
}

impl Credentials {
    /// Creates credentials for the unit `mac` protected by `password`.
    #[must_use]
    pub fn new(mac: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mac: mac.into(),
            password: password.into(),
        }
    }

    /// Returns the unit identifier.
    #[must_use]
    pub fn mac(&self) -> &str {
        &self.mac
    }

    /// Returns the unit PIN.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("mac", &self.mac)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for talking to the WiRCU API.
///
/// # Examples
///
/// ```
/// use fumis_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("AABBCCDDEEFF", "1234")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("LoremIpsum/1.0");
///
/// assert_eq!(config.base_url(), "https://api.fumis.si");
/// assert_eq!(config.user_agent(), "LoremIpsum/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl HttpConfig {
    /// Default API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.fumis.si";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default `User-Agent` header.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Creates a configuration for the unit `mac` with its `password`.
    #[must_use]
    pub fn new(mac: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(mac, password),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Points the client at another API endpoint.
    ///
    /// `https://` is assumed when no scheme is given.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = if base_url.starts_with("http://") || base_url.starts_with("https://") {
            base_url
        } else {
            format!("https://{base_url}")
        };
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the timeout for a whole exchange (connect, send and read).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the unit credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API endpoint, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates an `HttpClient` that opens its own session when needed.
    #[must_use]
    pub fn into_client(self) -> HttpClient {
        HttpClient::new(self)
    }

    fn build_session(&self) -> Result<Client, ConnectionError> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ConnectionError::Transport)
    }
}

// ============================================================================
// HttpClient - One authenticated exchange per request
// ============================================================================

/// The reqwest client a request goes through, and who owns it.
#[derive(Debug, Clone)]
enum Session {
    /// Created by this library; released by [`HttpClient::close`].
    Owned(Client),
    /// Supplied by the caller; never released here.
    Shared(Client),
}

impl Session {
    fn client(&self) -> &Client {
        match self {
            Self::Owned(client) | Self::Shared(client) => client,
        }
    }
}

/// HTTP client for the WiRCU API.
///
/// Each [`request`](Self::request) is a single exchange: no retry, no
/// caching. Without a caller-supplied [`reqwest::Client`], a session is
/// created on first use and kept until [`close`](Self::close).
///
/// # Examples
///
/// ```no_run
/// use fumis_lib::protocol::{HttpClient, HttpConfig, Method};
///
/// # async fn example() -> fumis_lib::Result<()> {
/// let client = HttpClient::new(HttpConfig::new("AABBCCDDEEFF", "1234"));
/// let status = client.request("/v1/status", Method::Get, None).await?;
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    config: HttpConfig,
    session: Mutex<Option<Session>>,
}

impl HttpClient {
    /// Creates a client that manages its own session.
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    /// Creates a client that sends every request through `client`.
    ///
    /// The caller keeps ownership: [`close`](Self::close) leaves it alone.
    #[must_use]
    pub fn with_shared_client(config: HttpConfig, client: Client) -> Self {
        Self {
            config,
            session: Mutex::new(Some(Session::Shared(client))),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Makes sure a session exists, creating an owned one if necessary.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn open(&self) -> Result<(), ConnectionError> {
        self.session().map(drop)
    }

    /// Releases the session if this client created it.
    ///
    /// A shared session stays in place. A later request opens a new owned
    /// session.
    pub fn close(&self) {
        let mut session = self.session.lock();
        if matches!(*session, Some(Session::Owned(_))) {
            *session = None;
            tracing::debug!("Released owned HTTP session");
        }
    }

    /// Returns `true` if a session is currently open.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.lock().is_some()
    }

    /// Returns `true` if the current session was created by this client.
    #[must_use]
    pub fn owns_session(&self) -> bool {
        matches!(*self.session.lock(), Some(Session::Owned(_)))
    }

    fn session(&self) -> Result<Client, ConnectionError> {
        let mut session = self.session.lock();
        if let Some(session) = session.as_ref() {
            return Ok(session.client().clone());
        }

        let client = self.config.build_session()?;
        tracing::debug!("Created owned HTTP session");
        *session = Some(Session::Owned(client.clone()));
        Ok(client)
    }

    /// Performs one exchange with the API.
    ///
    /// A POST, or any request given a `payload`, carries the authenticated
    /// [`Envelope`] as its JSON body. A GET without payload has no body.
    ///
    /// Returns `None` when the API answered successfully with an empty body.
    ///
    /// # Errors
    ///
    /// - [`ConnectionError::Timeout`] if the exchange exceeds the configured
    ///   timeout
    /// - [`ConnectionError::Transport`] if the request cannot be sent or the
    ///   body cannot be read
    /// - [`ApiError`] for a non-2xx status, a non-JSON content type or an
    ///   undecodable body
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Option<Value>, Error> {
        let client = self.session()?;
        let url = format!("{}{path}", self.config.base_url);

        tracing::debug!(url = %url, method = %method, "Sending API request");

        let mut request = match method {
            Method::Get => client.get(&url),
            Method::Post => client.post(&url),
        }
        .header(USER_AGENT, &self.config.user_agent)
        .header(ACCEPT, JSON_MIME);

        if method == Method::Post || payload.is_some() {
            let empty = Map::new();
            let envelope = Envelope::new(&self.config.credentials, payload.unwrap_or(&empty));
            request = request.json(&envelope);
        }

        let timeout = self.config.timeout;
        let exchange = async {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, content_type, body))
        };

        let (status, content_type, body) = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| ConnectionError::Timeout(timeout))?
            .map_err(|err| ConnectionError::from_reqwest(err, timeout))?;

        tracing::debug!(status, body_len = body.len(), "Received API response");

        decode_response(status, &content_type, body).map_err(Error::Api)
    }
}

impl Protocol for HttpClient {
    async fn request(
        &self,
        path: &str,
        method: Method,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Option<Value>, Error> {
        HttpClient::request(self, path, method, payload).await
    }
}

/// Validates a completed exchange and decodes its body.
fn decode_response(
    status: u16,
    content_type: &str,
    body: String,
) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, body });
    }

    if !content_type.contains(JSON_MIME) {
        return Err(ApiError::ContentType {
            status,
            content_type: content_type.to_string(),
            body,
        });
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(Some(value)),
        Err(source) => Err(ApiError::Json {
            status,
            body,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("AABBCCDDEEFF", "1234");
        assert_eq!(config.credentials().mac(), "AABBCCDDEEFF");
        assert_eq!(config.credentials().password(), "1234");
        assert_eq!(config.base_url(), "https://api.fumis.si");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent().starts_with("fumis_lib/"));
    }

    #[test]
    fn http_config_base_url_without_scheme() {
        let config = HttpConfig::new("AABBCCDDEEFF", "1234").with_base_url("api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn http_config_base_url_keeps_http() {
        let config =
            HttpConfig::new("AABBCCDDEEFF", "1234").with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("AABBCCDDEEFF", "1234")
            .with_timeout(Duration::from_secs(1))
            .with_user_agent("LoremIpsum/1.0");
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.user_agent(), "LoremIpsum/1.0");
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let credentials = Credentials::new("AABBCCDDEEFF", "secret-pin");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("AABBCCDDEEFF"));
        assert!(!debug.contains("secret-pin"));
    }

    // =========================================================================
    // Session ownership
    // =========================================================================

    #[test]
    fn owned_session_is_created_and_released() {
        let client = HttpConfig::new("AABBCCDDEEFF", "1234").into_client();
        assert!(!client.has_session());

        client.open().unwrap();
        assert!(client.has_session());
        assert!(client.owns_session());

        client.close();
        assert!(!client.has_session());
    }

    #[test]
    fn shared_session_survives_close() {
        let client = HttpClient::with_shared_client(
            HttpConfig::new("AABBCCDDEEFF", "1234"),
            Client::new(),
        );
        client.open().unwrap();
        assert!(!client.owns_session());

        client.close();
        assert!(client.has_session());
        assert!(!client.owns_session());
    }

    // =========================================================================
    // Response validation
    // =========================================================================

    #[test]
    fn decode_json_object() {
        let value = decode_response(200, "application/json", r#"{"test": "ok"}"#.into()).unwrap();
        assert_eq!(value, Some(json!({"test": "ok"})));
    }

    #[test]
    fn decode_accepts_charset_parameter() {
        let value = decode_response(200, "application/json; charset=utf-8", "{}".into()).unwrap();
        assert_eq!(value, Some(json!({})));
    }

    #[test]
    fn decode_empty_body_is_none() {
        assert_eq!(decode_response(200, "application/json", String::new()).unwrap(), None);
        assert_eq!(decode_response(204, "application/json", " \n".into()).unwrap(), None);
    }

    #[test]
    fn decode_error_status() {
        let err = decode_response(500, "text/plain", "OMG PUPPIES!".into()).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), "OMG PUPPIES!");
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn decode_wrong_content_type_on_success() {
        let err = decode_response(200, "other/content", "{}".into()).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ContentType { ref content_type, .. } if content_type == "other/content"
        ));
    }

    #[test]
    fn decode_missing_content_type() {
        let err = decode_response(200, "", "{}".into()).unwrap_err();
        assert!(matches!(err, ApiError::ContentType { .. }));
    }

    #[test]
    fn decode_invalid_json() {
        let err = decode_response(200, "application/json", "Invalid response".into()).unwrap_err();
        assert!(matches!(err, ApiError::Json { status: 200, .. }));
        assert_eq!(err.body(), "Invalid response");
    }
}
