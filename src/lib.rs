//! # tradovate-bridge
//!
//! A stdio bridge exposing the Tradovate REST API as a set of named,
//! parameter-validated operations.
//!
//! The bridge reads line-delimited JSON requests (`{id, method, params}`)
//! from standard input, validates and coerces each request's parameters,
//! performs one HTTP call against the Tradovate API, and writes the
//! decoded result back as a line-delimited JSON response.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]): wire-shape records for accounts, orders,
//!   positions, contracts, quotes, bars, and risk limits.
//! - **Client** ([`client`]): performs the HTTP exchange per operation and
//!   holds the bearer token obtained by authentication.
//! - **Registry** ([`registry`]): maps operation names to validation +
//!   delegation; the only component with conditional logic.
//! - **Bridge** ([`bridge`]): the stdio transport front-end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tradovate_bridge::{Bridge, ClientConfig, TradovateClient};
//! use tradovate_bridge::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> tradovate_bridge::Result<()> {
//!     let credentials = Credentials::from_env()?;
//!     let client = TradovateClient::new(ClientConfig::default(), credentials)?;
//!
//!     Bridge::new(client).run().await
//! }
//! ```
//!
//! ## Driving the registry directly
//!
//! ```rust,no_run
//! use serde_json::json;
//! use tradovate_bridge::{ClientConfig, Registry, TradovateClient};
//! use tradovate_bridge::auth::Credentials;
//!
//! # async fn example() -> tradovate_bridge::Result<()> {
//! let client = TradovateClient::new(ClientConfig::default(), Credentials::from_env()?)?;
//! let registry = Registry::new(client);
//!
//! registry.dispatch("authenticate", &Default::default()).await?;
//! let params = json!({
//!     "accountId": 12345,
//!     "contractId": 54321,
//!     "orderType": "Limit",
//!     "price": 100.50,
//!     "quantity": 10,
//!     "timeInForce": "Day"
//! });
//! let placed = registry
//!     .dispatch("placeOrder", params.as_object().unwrap())
//!     .await?;
//! println!("placed: {placed}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod bridge;
pub mod client;
pub mod error;
pub mod models;
pub mod registry;

// Re-export primary types at crate root for convenience
pub use api::TradovateApi;
pub use bridge::Bridge;
pub use client::{ClientConfig, TradovateClient};
pub use error::{Error, Result};
pub use registry::Registry;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tradovate_bridge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::TradovateApi;
    pub use crate::auth::{AccessToken, Credentials};
    pub use crate::bridge::Bridge;
    pub use crate::client::{ClientConfig, TradovateClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Account, AccountId, Contract, ContractId, Environment, Fill, HistoricalData,
        MarketData, Order, OrderId, OrderSide, OrderStatus, OrderType, Position, RiskLimit,
        TimeInForce,
    };
    pub use crate::registry::{Registry, OPERATIONS};
}
