//! HTTP client and configuration for the Tradovate API.
//!
//! This module provides the main entry point [`TradovateClient`] for
//! performing the HTTP exchange behind each bridge operation.
//!
//! # Example
//!
//! ```no_run
//! use tradovate_bridge::{ClientConfig, TradovateClient, auth::Credentials};
//! use tradovate_bridge::models::Environment;
//!
//! # async fn example() -> tradovate_bridge::Result<()> {
//! let client = TradovateClient::new(
//!     ClientConfig::default().with_environment(Environment::Demo),
//!     Credentials::from_env()?,
//! )?;
//!
//! client.authenticate().await?;
//! let contracts = client.market_data().contracts().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::TradovateClient;
pub(crate) use http::ClientInner;
