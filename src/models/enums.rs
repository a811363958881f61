//! Enumeration types shared across the order and market-data models.
//!
//! Wire spellings follow the Tradovate API exactly (`"Limit"`, `"GTC"`, …).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute immediately at the best available price.
    Market,
    /// Execute at the given price or better. Requires a price.
    Limit,
    /// Becomes a market order once the stop price trades.
    Stop,
    /// Becomes a limit order once the stop price trades.
    StopLimit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "Market"),
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Stop => write!(f, "Stop"),
            OrderType::StopLimit => write!(f, "StopLimit"),
        }
    }
}

/// Which side of the market an order takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy to open or close.
    Buy,
    /// Sell to open or close.
    Sell,
}

/// How long an order remains working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Valid for the current trading day.
    Day,
    /// Good 'til cancelled.
    #[serde(rename = "GTC")]
    Gtc,
    /// Good 'til date.
    #[serde(rename = "GTD")]
    Gtd,
    /// Immediate or cancel.
    #[serde(rename = "IOC")]
    Ioc,
    /// Fill or kill.
    #[serde(rename = "FOK")]
    Fok,
}

/// Current status of an order as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted but not yet working.
    Pending,
    /// Working at the exchange.
    Working,
    /// Fully filled.
    Filled,
    /// Cancelled before completion.
    Canceled,
    /// Rejected by the exchange or broker.
    Rejected,
    /// Expired per its time in force.
    Expired,
}
