//! Parameter extraction and coercion for the operation registry.
//!
//! Requests arrive as untyped JSON objects; these helpers turn them into
//! typed request values, reporting a validation error naming the offending
//! field. Presence is checked before type for every field, and numeric
//! identifiers and quantities coerce from JSON numbers by truncation.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::{AccountId, ContractId, Order, OrderId, OrderType, RiskLimit, TimeInForce};
use crate::{Error, Result};

/// The untyped parameter bag a request carries.
pub type Params = Map<String, Value>;

fn require<'a>(params: &'a Params, field: &'static str) -> Result<&'a Value> {
    params.get(field).ok_or(Error::MissingField { field })
}

fn require_f64(params: &Params, field: &'static str) -> Result<f64> {
    require(params, field)?
        .as_f64()
        .ok_or(Error::TypeMismatch { field })
}

fn require_str<'a>(params: &'a Params, field: &'static str) -> Result<&'a str> {
    require(params, field)?
        .as_str()
        .ok_or(Error::TypeMismatch { field })
}

/// A numeric field that may be absent. An explicit `null` counts as
/// absent; any other non-numeric value is a type mismatch.
fn optional_f64(params: &Params, field: &'static str) -> Result<Option<f64>> {
    match params.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or(Error::TypeMismatch { field }),
    }
}

/// Coerce a string field into one of the wire-spelling enums.
fn enum_field<T: DeserializeOwned>(raw: &str, field: &'static str) -> Result<T> {
    serde_json::from_value(Value::String(raw.to_owned()))
        .map_err(|_| Error::TypeMismatch { field })
}

fn timestamp_field(params: &Params, field: &'static str) -> Result<DateTime<Utc>> {
    let raw = require_str(params, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp { field, source })
}

/// A risk-limit field: must be present, numeric, and non-negative.
fn limit_field(params: &Params, field: &'static str) -> Result<f64> {
    match params.get(field).and_then(Value::as_f64) {
        Some(value) if value >= 0.0 => Ok(value),
        _ => Err(Error::InvalidLimit { field }),
    }
}

pub(crate) fn order_id(params: &Params) -> Result<OrderId> {
    Ok(OrderId::new(require_f64(params, "orderId")? as i64))
}

pub(crate) fn contract_id(params: &Params) -> Result<ContractId> {
    Ok(ContractId::new(require_f64(params, "contractId")? as i64))
}

pub(crate) fn account_id(params: &Params) -> Result<AccountId> {
    Ok(AccountId::new(require_f64(params, "accountId")? as i64))
}

/// Validate and coerce the `placeOrder` parameters.
///
/// Presence of every required field is checked first, in declaration
/// order, then each field's type, then the limit-order price rule.
pub(crate) fn place_order(params: &Params) -> Result<Order> {
    const REQUIRED: [&str; 5] = [
        "accountId",
        "contractId",
        "orderType",
        "quantity",
        "timeInForce",
    ];
    for field in REQUIRED {
        if !params.contains_key(field) {
            return Err(Error::MissingField { field });
        }
    }

    let account_id = require_f64(params, "accountId")? as i64;
    let contract_id = require_f64(params, "contractId")? as i64;
    let order_type: OrderType = enum_field(require_str(params, "orderType")?, "orderType")?;
    let quantity = require_f64(params, "quantity")? as i64;
    let time_in_force: TimeInForce =
        enum_field(require_str(params, "timeInForce")?, "timeInForce")?;

    let price = optional_f64(params, "price")?;
    if order_type == OrderType::Limit && price.is_none() {
        return Err(Error::MissingConditionalField { field: "price" });
    }

    let mut order = Order::new(
        AccountId::new(account_id),
        ContractId::new(contract_id),
        order_type,
        quantity,
        time_in_force,
    );
    order.price = price;
    Ok(order)
}

/// Validate and coerce the `setRiskLimits` parameters.
///
/// Each of the four limit fields must be present, numeric, and
/// non-negative.
pub(crate) fn risk_limits(params: &Params) -> Result<RiskLimit> {
    let account_id = require_f64(params, "accountId")? as i64;
    let day_max_loss = limit_field(params, "dayMaxLoss")?;
    let max_drawdown = limit_field(params, "maxDrawdown")?;
    let max_position_qty = limit_field(params, "maxPositionQty")? as i64;
    let trailing_stop = limit_field(params, "trailingStop")?;

    Ok(RiskLimit {
        account_id: AccountId::new(account_id),
        day_max_loss,
        max_drawdown,
        max_position_qty,
        trailing_stop,
    })
}

/// Validated parameters for `getHistoricalData`.
#[derive(Debug)]
pub(crate) struct HistoricalRequest {
    pub contract_id: ContractId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub interval: String,
}

/// Validate and coerce the `getHistoricalData` parameters.
///
/// Both timestamps must parse as RFC 3339 and the end time must follow
/// the start time.
pub(crate) fn historical_data(params: &Params) -> Result<HistoricalRequest> {
    const REQUIRED: [&str; 4] = ["contractId", "startTime", "endTime", "interval"];
    for field in REQUIRED {
        if !params.contains_key(field) {
            return Err(Error::MissingField { field });
        }
    }

    let contract_id = require_f64(params, "contractId")? as i64;
    let start_time = timestamp_field(params, "startTime")?;
    let end_time = timestamp_field(params, "endTime")?;
    let interval = require_str(params, "interval")?.to_string();

    if end_time <= start_time {
        return Err(Error::InvalidTimeRange);
    }

    Ok(HistoricalRequest {
        contract_id: ContractId::new(contract_id),
        start_time,
        end_time,
        interval,
    })
}
