//! HTTP client implementation for the Tradovate API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{AccountsService, MarketDataService, OrdersService};
use crate::auth::{AccessToken, Credentials};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Tradovate API.
///
/// The client holds the bearer token obtained by [`authenticate`] and
/// attaches it to every subsequent request. API areas are reached through
/// service accessors.
///
/// # Example
///
/// ```no_run
/// use tradovate_bridge::{ClientConfig, TradovateClient, auth::Credentials};
///
/// # async fn example() -> tradovate_bridge::Result<()> {
/// let credentials = Credentials::from_env()?;
/// let client = TradovateClient::new(ClientConfig::default(), credentials)?;
///
/// let token = client.authenticate().await?;
/// let accounts = client.accounts().list().await?;
/// println!("{} accounts for {}", accounts.len(), token.name);
/// # Ok(())
/// # }
/// ```
///
/// [`authenticate`]: TradovateClient::authenticate
pub struct TradovateClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    /// Bearer token from the last successful authentication. Request
    /// processing is sequential, but the lock keeps a future concurrent
    /// dispatcher sound.
    pub(crate) token: RwLock<Option<SecretString>>,
}

impl TradovateClient {
    /// Create a new client.
    ///
    /// No network activity happens until [`authenticate`] or an API call
    /// is made.
    ///
    /// [`authenticate`]: TradovateClient::authenticate
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.resolved_base_url(),
                credentials,
                token: RwLock::new(None),
            }),
        })
    }

    /// Authenticate with the API and store the returned bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the server rejects the
    /// credentials, [`Error::Http`] when the exchange fails to complete.
    pub async fn authenticate(&self) -> Result<AccessToken> {
        let url = format!("{}/auth/accessTokenRequest", self.inner.base_url);
        let response = self
            .inner
            .http
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&self.inner.credentials.to_request())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        if status >= 400 {
            return Err(api_error(status, &body));
        }

        let token: AccessToken = serde_json::from_slice(&body)?;
        if let Some(text) = token.error_text.as_deref().filter(|t| !t.is_empty()) {
            return Err(Error::Authentication(text.to_string()));
        }

        *self.inner.token.write().await =
            Some(SecretString::from(token.access_token.clone()));
        tracing::debug!(user = %token.name, "authenticated with Tradovate");
        Ok(token)
    }

    /// Returns `true` once a bearer token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the market data service.
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// Build request headers, attaching the bearer token when held.
    async fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.token.read().await.as_ref() {
            let value = format!("Bearer {}", token.expose_secret());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value)
                    .map_err(|_| Error::Authentication("invalid token format".to_string()))?,
            );
        }

        Ok(headers)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;
        let response = self.http.get(&url).headers(headers).send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;
        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request and decode the response body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;
        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request where only the status matters.
    pub(crate) async fn post_expect_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;
        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;
        self.handle_status(response).await
    }

    /// Make a DELETE request where only the status matters.
    pub(crate) async fn delete_expect_ok(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;
        let response = self.http.delete(&url).headers(headers).send().await?;
        self.handle_status(response).await
    }

    /// Decode a response body, normalizing error statuses first.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if status >= 400 {
            return Err(api_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Check a response for success, discarding the body.
    async fn handle_status(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.bytes().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(())
    }
}

/// Normalize a non-success response into [`Error::Api`], picking up the
/// server's `errorText` when the body carries one.
fn api_error(status: u16, body: &[u8]) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(rename = "errorText")]
        error_text: Option<String>,
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error_text);

    Error::Api { status, message }
}

impl Clone for TradovateClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TradovateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradovateClient")
            .field("base_url", &self.inner.base_url)
            .finish()
    }
}
