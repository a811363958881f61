//! Contract and market-data models.

use serde::{Deserialize, Serialize};

use super::primitives::ContractId;

/// A tradable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Unique identifier for the contract
    pub id: ContractId,
    /// Contract name
    pub name: String,
    /// Type of contract (e.g. "Future")
    pub contract_type: String,
    /// Exchange where the contract is traded
    pub exchange: String,
    /// Trading symbol
    pub symbol: String,
}

/// A real-time quote for a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    /// Contract this quote is for
    pub contract_id: ContractId,
    /// Best bid price
    pub bid: f64,
    /// Best ask price
    pub ask: f64,
    /// Last trade price
    pub last: f64,
    /// Trading volume
    pub volume: i64,
    /// Quote timestamp, unix seconds
    pub timestamp: i64,
}

/// One historical price bar for a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    /// Contract this bar is for
    pub contract_id: ContractId,
    /// Bar timestamp, unix seconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: i64,
}
