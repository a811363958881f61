//! Authentication types for the Tradovate API.
//!
//! Tradovate uses a single token-request exchange: the client posts the
//! account credentials plus application/OAuth identifiers to
//! `/auth/accessTokenRequest` and receives a bearer token that is attached
//! to every subsequent request.
//!
//! Credentials are sourced from the process environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `TRADOVATE_USERNAME` | account username |
//! | `TRADOVATE_PASSWORD` | account password |
//! | `TRADOVATE_APP_ID` | application ID |
//! | `TRADOVATE_APP_VERSION` | application version string |
//! | `TRADOVATE_CID` | OAuth client ID |
//! | `TRADOVATE_SEC` | OAuth client secret |

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Credentials for Tradovate authentication.
///
/// Secret material is held as [`SecretString`] so it never appears in
/// debug output. Credentials are input-only and never persisted.
#[derive(Clone)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: SecretString,
    /// Application ID issued by Tradovate
    pub app_id: String,
    /// Application version string
    pub app_version: String,
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        app_id: impl Into<String>,
        app_version: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            app_id: app_id.into(),
            app_version: app_version.into(),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Load credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first missing variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            require_env("TRADOVATE_USERNAME")?,
            require_env("TRADOVATE_PASSWORD")?,
            require_env("TRADOVATE_APP_ID")?,
            require_env("TRADOVATE_APP_VERSION")?,
            require_env("TRADOVATE_CID")?,
            require_env("TRADOVATE_SEC")?,
        ))
    }

    /// Build the wire-format token request body.
    pub(crate) fn to_request(&self) -> TokenRequest<'_> {
        TokenRequest {
            name: &self.username,
            password: self.password.expose_secret(),
            app_id: &self.app_id,
            app_version: &self.app_version,
            cid: &self.client_id,
            sec: self.client_secret.expose_secret(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("app_version", &self.app_version)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

fn require_env(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config(format!("{name} is not set")))
}

/// Wire-format body for `POST /auth/accessTokenRequest`.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
    #[serde(rename = "appId")]
    pub app_id: &'a str,
    #[serde(rename = "appVersion")]
    pub app_version: &'a str,
    pub cid: &'a str,
    pub sec: &'a str,
}

/// Response to an authentication request.
///
/// A rejected authentication still decodes into this type, carrying only
/// `error_text`; all other fields default.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    /// Bearer token for API access
    #[serde(default)]
    pub access_token: String,
    /// Bearer token for market-data access
    #[serde(default)]
    pub md_access_token: String,
    /// Token expiration time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
    /// Unique identifier for the user
    #[serde(default)]
    pub user_id: i64,
    /// Username of the authenticated user
    #[serde(default)]
    pub name: String,
    /// Error message when authentication fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("md_access_token", &"[REDACTED]")
            .field("expiration_time", &self.expiration_time)
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("error_text", &self.error_text)
            .finish()
    }
}
