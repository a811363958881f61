//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the numeric
//! identifiers Tradovate uses, to prevent mixing up different kinds of
//! IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed account identifier.
///
/// # Example
///
/// ```
/// use tradovate_bridge::models::AccountId;
///
/// let account = AccountId::new(12345);
/// assert_eq!(account.as_i64(), 12345);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create a new account ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Create a new order ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed contract identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(i64);

impl ContractId {
    /// Create a new contract ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContractId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Environment configuration for the Tradovate API.
///
/// Determines which API endpoints to use - live or demo.
///
/// # Example
///
/// ```
/// use tradovate_bridge::models::Environment;
///
/// let env = Environment::Demo;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live environment - real trading with real money.
    #[default]
    Live,
    /// Demo environment for testing against simulated fills.
    Demo,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Live => "https://live.tradovate.com/v1",
            Environment::Demo => "https://demo.tradovate.com/v1",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Demo => write!(f, "demo"),
        }
    }
}
