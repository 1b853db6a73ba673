/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, Url, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{Credentials, JwtSigner};
use crate::http::{Params, Result, UpbitError};

/// Base URL and versioned path prefix for the Upbit REST API
const REST_BASE_URL: &str = "https://api.upbit.com";
const REST_VERSION: &str = "/v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Upbit API.
///
/// A client built with [`new`](UpbitClient::new) serves the public market-data
/// endpoints and never signs. A client built with
/// [`with_credentials`](UpbitClient::with_credentials) attaches an
/// `Authorization` header to every request it sends.
///
/// The client is cheap to share: one instance owns one pooled transport and
/// holds no mutable state, so it can be used concurrently across tasks.
#[derive(Debug)]
pub struct UpbitClient {
    http_client: Client,
    base_url: String,
    signer: Option<JwtSigner>,
}

impl UpbitClient {
    /// Create a public (unauthenticated) client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, format!("{REST_BASE_URL}{REST_VERSION}"), None)
    }

    /// Create an authenticated client with default configuration
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::with_credentials_and_config(credentials, ClientConfig::default())
    }

    /// Create an authenticated client with custom configuration
    pub fn with_credentials_and_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::build(
            config,
            format!("{REST_BASE_URL}{REST_VERSION}"),
            Some(JwtSigner::new(credentials)),
        )
    }

    /// Create a client against an explicit base URL (no version suffix is
    /// appended). Used by tests to point at a mock server.
    pub fn with_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        Self::build(config, base_url.to_string(), credentials.map(JwtSigner::new))
    }

    fn build(config: ClientConfig, base_url: String, signer: Option<JwtSigner>) -> Result<Self> {
        Url::parse(&base_url)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            signer,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.signer.is_some()
    }

    /// Fail fast before network I/O when a private endpoint is called on a
    /// credential-less client.
    pub(crate) fn require_credentials(&self) -> Result<()> {
        if self.signer.is_some() {
            Ok(())
        } else {
            Err(UpbitError::Config(
                "endpoint requires credentials; build the client with with_credentials".to_string(),
            ))
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.dispatch(Method::GET, path, params).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.dispatch(Method::POST, path, params).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        self.dispatch(Method::DELETE, path, params).await
    }

    /// Build, sign and send one request, then decode the JSON response.
    ///
    /// Read verbs carry `params` in the query string; write verbs carry them
    /// as a form-encoded body, matching what the exchange parses for each
    /// verb. Either way the signature covers the one canonical encoding that
    /// is actually transmitted.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let encoded = params.encode();
        let is_write = method == Method::POST || method == Method::DELETE;

        let url = if !is_write && !encoded.is_empty() {
            format!("{}{}?{}", self.base_url, path, encoded)
        } else {
            format!("{}{}", self.base_url, path)
        };

        let mut request = self.http_client.request(method.clone(), url.as_str());
        request = if is_write {
            request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded)
        } else {
            request.header(header::CONTENT_TYPE, "application/json")
        };

        if let Some(signer) = &self.signer {
            request = request.header(header::AUTHORIZATION, signer.bearer_token(params)?);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpbitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%method, path, status = status.as_u16(), "request completed");

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(UpbitError::Decode)
    }
}
