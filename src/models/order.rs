//! Order and fill models.

use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};
use super::primitives::{AccountId, ContractId, OrderId};

/// A trading order.
///
/// The same shape is used for submission and for the API's echo of a
/// placed order; `id` and the status fields are assigned by the server
/// and absent on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    /// Account that placed the order
    pub account_id: AccountId,
    /// Contract being traded
    pub contract_id: ContractId,
    /// Type of order
    pub order_type: OrderType,
    /// Order side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Limit price, required for limit orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Stop price for stop orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    /// Number of contracts
    pub quantity: i64,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Current order status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Number of contracts filled
    #[serde(default)]
    pub filled_qty: i64,
    /// Average fill price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
    /// Order creation timestamp, unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last update timestamp, unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Order {
    /// Create an order for submission with the required fields only.
    pub fn new(
        account_id: AccountId,
        contract_id: ContractId,
        order_type: OrderType,
        quantity: i64,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            id: None,
            account_id,
            contract_id,
            order_type,
            side: None,
            price: None,
            stop_price: None,
            quantity,
            time_in_force,
            status: None,
            filled_qty: 0,
            average_price: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the limit price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the order side.
    pub fn with_side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }
}

/// A fill against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Unique identifier for the fill
    pub id: i64,
    /// Order that was filled
    pub order_id: OrderId,
    /// Fill price
    pub price: f64,
    /// Fill quantity
    pub quantity: i64,
    /// Fill timestamp, unix seconds
    pub timestamp: i64,
}
