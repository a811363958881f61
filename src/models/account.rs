//! Account, position, and risk-limit models.

use serde::{Deserialize, Serialize};

use super::primitives::{AccountId, ContractId};

/// A trading account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier for the account
    pub id: AccountId,
    /// Account name
    pub name: String,
    /// Type of account (e.g. "Demo", "Live")
    pub account_type: String,
    /// Whether the account is active
    pub active: bool,
    /// Current cash balance
    pub cash_balance: f64,
    /// Realized profit and loss
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: f64,
    /// Unrealized profit and loss
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: f64,
}

/// An open position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Unique identifier for the position
    pub id: i64,
    /// Account holding the position
    pub account_id: AccountId,
    /// Contract being held
    pub contract_id: ContractId,
    /// Net position size; negative means short
    pub net_pos: i64,
    /// Average entry price
    pub avg_price: f64,
    /// Realized profit/loss
    #[serde(rename = "realizedPL")]
    pub realized_pl: f64,
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: f64,
}

/// Risk management limits for an account.
///
/// The four limit fields are validated to be non-negative before any
/// update reaches the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLimit {
    /// Account these limits apply to
    pub account_id: AccountId,
    /// Maximum loss allowed per day
    pub day_max_loss: f64,
    /// Maximum drawdown allowed
    pub max_drawdown: f64,
    /// Maximum position size allowed
    pub max_position_qty: i64,
    /// Trailing stop percentage
    pub trailing_stop: f64,
}
