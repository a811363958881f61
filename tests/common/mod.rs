//! Shared test support: a scriptable mock of the Tradovate API.
//!
//! Mirrors the production client's seam: each operation can be overridden
//! per test with a closure, and every call is counted so tests can assert
//! that validation failures never reach the client.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use tradovate_bridge::auth::AccessToken;
use tradovate_bridge::models::{
    Account, AccountId, Contract, ContractId, Fill, HistoricalData, MarketData, Order, OrderId,
    Position, RiskLimit,
};
use tradovate_bridge::{Result, TradovateApi};

type AuthenticateFn = Box<dyn Fn() -> Result<AccessToken> + Send + Sync>;
type AccountsFn = Box<dyn Fn() -> Result<Vec<Account>> + Send + Sync>;
type PositionsFn = Box<dyn Fn() -> Result<Vec<Position>> + Send + Sync>;
type ContractsFn = Box<dyn Fn() -> Result<Vec<Contract>> + Send + Sync>;
type PlaceOrderFn = Box<dyn Fn(Order) -> Result<Order> + Send + Sync>;
type CancelOrderFn = Box<dyn Fn(OrderId) -> Result<()> + Send + Sync>;
type FillsFn = Box<dyn Fn(OrderId) -> Result<Vec<Fill>> + Send + Sync>;
type MarketDataFn = Box<dyn Fn(ContractId) -> Result<MarketData> + Send + Sync>;
type HistoricalFn = Box<
    dyn Fn(ContractId, DateTime<Utc>, DateTime<Utc>, &str) -> Result<Vec<HistoricalData>>
        + Send
        + Sync,
>;
type GetRiskLimitsFn = Box<dyn Fn(AccountId) -> Result<RiskLimit> + Send + Sync>;
type SetRiskLimitsFn = Box<dyn Fn(RiskLimit) -> Result<()> + Send + Sync>;

/// A mock API client. Each operation falls back to a plausible default
/// unless a test installs its own closure.
#[derive(Default)]
pub struct MockApi {
    pub calls: AtomicUsize,
    pub authenticate_fn: Option<AuthenticateFn>,
    pub get_accounts_fn: Option<AccountsFn>,
    pub get_positions_fn: Option<PositionsFn>,
    pub get_contracts_fn: Option<ContractsFn>,
    pub place_order_fn: Option<PlaceOrderFn>,
    pub cancel_order_fn: Option<CancelOrderFn>,
    pub get_fills_fn: Option<FillsFn>,
    pub get_market_data_fn: Option<MarketDataFn>,
    pub get_historical_data_fn: Option<HistoricalFn>,
    pub get_risk_limits_fn: Option<GetRiskLimitsFn>,
    pub set_risk_limits_fn: Option<SetRiskLimitsFn>,
}

impl MockApi {
    /// How many operations reached the client.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// A token response as the API would return it on success.
pub fn sample_token() -> AccessToken {
    AccessToken {
        access_token: "test-token".to_string(),
        md_access_token: "test-md-token".to_string(),
        expiration_time: Some("2024-12-31T23:59:59Z".parse().unwrap()),
        user_id: 12345,
        name: "Test User".to_string(),
        error_text: None,
    }
}

#[async_trait]
impl TradovateApi for MockApi {
    async fn authenticate(&self) -> Result<AccessToken> {
        self.record();
        match &self.authenticate_fn {
            Some(f) => f(),
            None => Ok(sample_token()),
        }
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.record();
        match &self.get_accounts_fn {
            Some(f) => f(),
            None => Ok(Vec::new()),
        }
    }

    async fn get_positions(&self) -> Result<Vec<Position>> {
        self.record();
        match &self.get_positions_fn {
            Some(f) => f(),
            None => Ok(Vec::new()),
        }
    }

    async fn get_contracts(&self) -> Result<Vec<Contract>> {
        self.record();
        match &self.get_contracts_fn {
            Some(f) => f(),
            None => Ok(Vec::new()),
        }
    }

    async fn place_order(&self, order: Order) -> Result<Order> {
        self.record();
        match &self.place_order_fn {
            Some(f) => f(order),
            None => Ok(order),
        }
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<()> {
        self.record();
        match &self.cancel_order_fn {
            Some(f) => f(order_id),
            None => Ok(()),
        }
    }

    async fn get_fills(&self, order_id: OrderId) -> Result<Vec<Fill>> {
        self.record();
        match &self.get_fills_fn {
            Some(f) => f(order_id),
            None => Ok(vec![Fill {
                id: 1,
                order_id,
                price: 100.50,
                quantity: 5,
                timestamp: 1_700_000_000,
            }]),
        }
    }

    async fn get_market_data(&self, contract_id: ContractId) -> Result<MarketData> {
        self.record();
        match &self.get_market_data_fn {
            Some(f) => f(contract_id),
            None => Ok(MarketData {
                contract_id,
                bid: 100.0,
                ask: 101.0,
                last: 100.5,
                volume: 1500,
                timestamp: 1_700_000_000,
            }),
        }
    }

    async fn get_historical_data(
        &self,
        contract_id: ContractId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalData>> {
        self.record();
        match &self.get_historical_data_fn {
            Some(f) => f(contract_id, start_time, end_time, interval),
            None => Ok(vec![HistoricalData {
                contract_id,
                timestamp: start_time.timestamp(),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.5,
                volume: 1000,
            }]),
        }
    }

    async fn get_risk_limits(&self, account_id: AccountId) -> Result<RiskLimit> {
        self.record();
        match &self.get_risk_limits_fn {
            Some(f) => f(account_id),
            None => Ok(RiskLimit {
                account_id,
                day_max_loss: 1000.0,
                max_drawdown: 500.0,
                max_position_qty: 10,
                trailing_stop: 50.0,
            }),
        }
    }

    async fn set_risk_limits(&self, limits: RiskLimit) -> Result<()> {
        self.record();
        match &self.set_risk_limits_fn {
            Some(f) => f(limits),
            None => Ok(()),
        }
    }
}
