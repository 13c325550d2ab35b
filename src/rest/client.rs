//! OKX REST API client implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{
    CredentialsProvider, EnvCredentials, SystemClock, TimestampProvider, sign_request,
};
use crate::error::{ApiError, OkxError, parse_code};
use crate::rest::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::rest::endpoints::OKX_BASE_URL;
use crate::rest::proxy::ProxyConfig;
use crate::rest::request::{Method, PreparedRequest, RequestBody};

/// Header carrying the API key.
pub const HEADER_ACCESS_KEY: &str = "OK-ACCESS-KEY";
/// Header carrying the request signature.
pub const HEADER_ACCESS_SIGN: &str = "OK-ACCESS-SIGN";
/// Header carrying the request timestamp.
pub const HEADER_ACCESS_TIMESTAMP: &str = "OK-ACCESS-TIMESTAMP";
/// Header carrying the passphrase.
pub const HEADER_ACCESS_PASSPHRASE: &str = "OK-ACCESS-PASSPHRASE";
/// Header switching requests to the demo trading environment.
pub const HEADER_SIMULATED_TRADING: &str = "x-simulated-trading";

/// The OKX REST API client.
///
/// Every call is signed with HMAC-SHA256 and dispatched as an independent
/// request. The client holds no mutable state and is cheap to clone, so it can
/// be shared across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use okx_api_client::rest::OkxRestClient;
/// use okx_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "secret_key", "passphrase"));
///     let client = OkxRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let balances = client.balances(None).await?;
///     for (ccy, balance) in &balances {
///         println!("{}: {}", ccy, balance.avail_bal);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct OkxRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    simulated_trading: bool,
}

impl OkxRestClient {
    /// Create a new client builder.
    pub fn builder() -> OkxRestClientBuilder {
        OkxRestClientBuilder::new()
    }

    /// Create a client from `OKX_*` environment variables.
    ///
    /// Reads credentials via [`EnvCredentials`] and connection settings via
    /// [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, OkxError> {
        Self::builder()
            .config(ClientConfig::from_env())
            .credentials(Arc::new(EnvCredentials::from_env()))
            .build()
    }

    /// The entrypoint URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are configured and completely filled.
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(|c| c.get_credentials().completely_filled())
    }

    /// Sign and send a request, returning the decoded response envelope.
    ///
    /// For GET the body is encoded into the query string before signing; for
    /// POST it is sent as a JSON document. A response whose `code` is a
    /// non-zero integer fails with [`OkxError::Api`].
    pub async fn make_request(
        &self,
        method: Method,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<Value, OkxError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(OkxError::MissingCredentials)?;
        let creds = credentials.get_credentials();
        if !creds.completely_filled() {
            return Err(OkxError::MissingCredentials);
        }

        let timestamp = self.timestamp_provider.timestamp()?;
        let prepared = PreparedRequest::new(method, path, &body.into())?;

        // The signed path and body must match the bytes on the wire exactly.
        let signature = sign_request(
            creds,
            &timestamp,
            method.as_str(),
            &prepared.request_path,
            &prepared.body,
        )?;

        let url = format!("{}{}", self.base_url, prepared.request_path);
        let mut request = match method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url).body(prepared.body.clone()),
        };
        request = request
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_ACCESS_KEY, &creds.api_key)
            .header(HEADER_ACCESS_SIGN, signature)
            .header(HEADER_ACCESS_TIMESTAMP, &timestamp)
            .header(HEADER_ACCESS_PASSPHRASE, creds.expose_passphrase());
        if self.simulated_trading {
            request = request.header(HEADER_SIMULATED_TRADING, "1");
        }

        tracing::debug!(%method, path = %prepared.request_path, "sending OKX request");
        let response = request.send().await?;

        self.parse_response(response).await
    }

    /// Sign and send a request, decoding `data` into typed records.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<Vec<T>, OkxError>
    where
        T: DeserializeOwned,
    {
        let value = self.make_request(method, path, body).await?;
        let envelope: ResponseEnvelope<T> = serde_json::from_value(value)?;
        Ok(envelope.data)
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn private_get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<Vec<T>, OkxError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = RequestBody::from_params(params)?;
        self.request(Method::Get, endpoint, body).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn private_post<T, P>(&self, endpoint: &str, params: &P) -> Result<Vec<T>, OkxError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = RequestBody::from_params(params)?;
        self.request(Method::Post, endpoint, body).await
    }

    /// Parse a response from the OKX API.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, OkxError> {
        let status = response.status();
        let body = response.text().await?;

        // A body that is not JSON is a decode failure, whatever the status.
        let parsed: Value = serde_json::from_str(&body).inspect_err(|_| {
            tracing::warn!(status = status.as_u16(), "OKX returned a non-JSON response");
        })?;

        // A missing `code` is treated as success.
        if let Some(code) = parsed.get("code") {
            match parse_code(code) {
                Some(0) => {}
                Some(_) => {
                    let error = ApiError::from_response(status.as_u16(), body);
                    tracing::warn!(code = ?error.code, msg = ?error.msg, "OKX API error");
                    return Err(OkxError::Api(error));
                }
                None => {
                    return Err(OkxError::InvalidResponse(format!(
                        "Response code is not an integer: {code}"
                    )));
                }
            }
        }

        Ok(parsed)
    }
}

impl std::fmt::Debug for OkxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkxRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("simulated_trading", &self.simulated_trading)
            .finish()
    }
}

/// The `{code, msg, data}` wrapper of every OKX response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Result code, `0` on success. `None` when the response carries no code
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<i64>,
    /// Message, empty on success
    #[serde(default)]
    pub msg: String,
    /// Records returned by the endpoint
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Accept the envelope code as a string or a number.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(code) => parse_code(&code)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid response code: {code}"))),
    }
}

/// Collect records into a map keyed by a natural identifier.
///
/// Later records win when two share a key.
pub(crate) fn key_by<T, F>(records: Vec<T>, key: F) -> HashMap<String, T>
where
    F: Fn(&T) -> &str,
{
    records
        .into_iter()
        .map(|record| (key(&record).to_string(), record))
        .collect()
}

/// Take the single record an action endpoint answers with.
pub(crate) fn single<T>(records: Vec<T>, endpoint: &str) -> Result<T, OkxError> {
    records.into_iter().next().ok_or_else(|| {
        OkxError::InvalidResponse(format!("Empty data array from {endpoint}"))
    })
}

/// Builder for [`OkxRestClient`].
pub struct OkxRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    proxy: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    simulated_trading: bool,
}

impl OkxRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: OKX_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            simulated_trading: false,
        }
    }

    /// Apply entrypoint URL, proxy, timeout and demo flag from a [`ClientConfig`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.base_url = config.entrypoint_url;
        self.proxy = config.proxy;
        self.timeout = config.timeout;
        self.simulated_trading = config.simulated_trading;
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Route every request through an HTTP or SOCKS5 proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the per-request timeout (default 30 seconds).
    ///
    /// The timeout bounds every request, GET and POST alike. A POST that
    /// times out may still have been executed by OKX; check the history
    /// endpoints before resubmitting a withdrawal or transfer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests to the demo trading environment.
    pub fn simulated_trading(mut self, enabled: bool) -> Self {
        self.simulated_trading = enabled;
        self
    }

    /// Build the client.
    ///
    /// Fails when the base URL or proxy string cannot be parsed, or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<OkxRestClient, OkxError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("okx-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("okx-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);

        if let Some(proxy) = self.proxy.as_deref() {
            let proxy = ProxyConfig::parse(proxy)?;
            tracing::debug!(?proxy, "routing OKX requests through proxy");
            reqwest_builder = reqwest_builder.proxy(proxy.to_reqwest()?);
        }

        let client = ClientBuilder::new(reqwest_builder.build()?)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock));

        Ok(OkxRestClient {
            http_client: client,
            base_url,
            credentials: self.credentials,
            timestamp_provider,
            simulated_trading: self.simulated_trading,
        })
    }
}

impl Default for OkxRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
