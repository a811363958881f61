//! The operation registry.
//!
//! A fixed mapping from operation name to a description and a
//! validate/coerce/delegate function. Parameter validation happens here,
//! before any network activity; client errors pass through unchanged.

mod params;

pub use params::Params;

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::TradovateApi;
use crate::{Error, Result};

/// Name and description of one exposed operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    /// The method name requests use
    pub name: &'static str,
    /// Human-readable description of the operation
    pub description: &'static str,
}

/// Every operation the bridge exposes.
pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "authenticate",
        description: "Authenticate with the Tradovate API",
    },
    OperationSpec {
        name: "getAccounts",
        description: "Get all accounts for the authenticated user",
    },
    OperationSpec {
        name: "getPositions",
        description: "Get current positions",
    },
    OperationSpec {
        name: "placeOrder",
        description: "Place a new order",
    },
    OperationSpec {
        name: "cancelOrder",
        description: "Cancel an existing order",
    },
    OperationSpec {
        name: "getFills",
        description: "Get fills for a specific order",
    },
    OperationSpec {
        name: "getContracts",
        description: "Get available contracts",
    },
    OperationSpec {
        name: "getMarketData",
        description: "Get real-time market data for a contract",
    },
    OperationSpec {
        name: "getHistoricalData",
        description: "Get historical price data for a contract",
    },
    OperationSpec {
        name: "setRiskLimits",
        description: "Set risk limits for an account",
    },
    OperationSpec {
        name: "getRiskLimits",
        description: "Get current risk management limits for an account",
    },
];

/// Dispatches named operations to an API client after validating and
/// coercing their parameters.
///
/// Generic over [`TradovateApi`] so tests can drive it with a mock.
pub struct Registry<C> {
    client: C,
}

impl<C: TradovateApi> Registry<C> {
    /// Create a registry over the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Validate `params` for the named operation and delegate to the
    /// client.
    ///
    /// # Errors
    ///
    /// Validation failures are returned before any client call is made;
    /// client failures are returned unchanged. An unrecognized name
    /// yields [`Error::UnknownOperation`].
    pub async fn dispatch(&self, method: &str, params: &Params) -> Result<Value> {
        match method {
            "authenticate" => {
                // Transport failures during the token exchange surface as
                // authentication failures, like a rejected credential does.
                let token = self.client.authenticate().await.map_err(|err| match err {
                    Error::Http(cause) => Error::Authentication(cause.to_string()),
                    other => other,
                })?;
                to_value(token)
            }
            "getAccounts" => to_value(self.client.get_accounts().await?),
            "getPositions" => to_value(self.client.get_positions().await?),
            "getContracts" => to_value(self.client.get_contracts().await?),
            "placeOrder" => {
                let order = params::place_order(params)?;
                to_value(self.client.place_order(order).await?)
            }
            "cancelOrder" => {
                let order_id = params::order_id(params)?;
                self.client.cancel_order(order_id).await?;
                Ok(json!({ "success": true }))
            }
            "getFills" => {
                let order_id = params::order_id(params)?;
                to_value(self.client.get_fills(order_id).await?)
            }
            "getMarketData" => {
                let contract_id = params::contract_id(params)?;
                to_value(self.client.get_market_data(contract_id).await?)
            }
            "getHistoricalData" => {
                let request = params::historical_data(params)?;
                to_value(
                    self.client
                        .get_historical_data(
                            request.contract_id,
                            request.start_time,
                            request.end_time,
                            &request.interval,
                        )
                        .await?,
                )
            }
            "setRiskLimits" => {
                let limits = params::risk_limits(params)?;
                self.client.set_risk_limits(limits).await?;
                Ok(json!({ "success": true }))
            }
            "getRiskLimits" => {
                let account_id = params::account_id(params)?;
                to_value(self.client.get_risk_limits(account_id).await?)
            }
            _ => Err(Error::UnknownOperation(method.to_string())),
        }
    }
}

/// Look up an operation's description.
pub fn describe(name: &str) -> Option<&'static str> {
    OPERATIONS
        .iter()
        .find(|op| op.name == name)
        .map(|op| op.description)
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
