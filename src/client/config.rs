//! Client configuration options.

use std::time::Duration;

use crate::models::Environment;

/// Configuration for the Tradovate client.
///
/// # Example
///
/// ```
/// use tradovate_bridge::{ClientConfig, models::Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Demo)
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Which API environment to target
    pub environment: Environment,
    /// Explicit base URL, overriding the environment's default
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("tradovate-bridge/{} (Rust)", env!("CARGO_PKG_VERSION")),
            environment: Environment::default(),
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the API environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL entirely, e.g. to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The effective base URL for API requests.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.environment.api_base_url().to_string())
    }
}
