//! API service modules and the client-facing trait.
//!
//! Each service provides methods for one area of the Tradovate API. The
//! [`TradovateApi`] trait gathers every operation the bridge exposes into
//! a single seam, so the registry can be driven by a mock in tests.

mod accounts;
mod market_data;
mod orders;

pub use accounts::AccountsService;
pub use market_data::MarketDataService;
pub use orders::OrdersService;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::AccessToken;
use crate::client::TradovateClient;
use crate::models::{
    Account, AccountId, Contract, ContractId, Fill, HistoricalData, MarketData, Order, OrderId,
    Position, RiskLimit,
};
use crate::Result;

/// The full set of API operations the bridge delegates to.
///
/// [`TradovateClient`] is the production implementation; tests substitute
/// their own.
#[async_trait]
pub trait TradovateApi: Send + Sync {
    /// Perform the initial authentication and return the token response.
    async fn authenticate(&self) -> Result<AccessToken>;

    /// Retrieve all accounts for the authenticated user.
    async fn get_accounts(&self) -> Result<Vec<Account>>;

    /// Retrieve all current positions.
    async fn get_positions(&self) -> Result<Vec<Position>>;

    /// Retrieve all available contracts.
    async fn get_contracts(&self) -> Result<Vec<Contract>>;

    /// Submit a new order and return the server's echo of it.
    async fn place_order(&self, order: Order) -> Result<Order>;

    /// Cancel an existing order.
    async fn cancel_order(&self, order_id: OrderId) -> Result<()>;

    /// Retrieve all fills for an order.
    async fn get_fills(&self, order_id: OrderId) -> Result<Vec<Fill>>;

    /// Retrieve the current quote for a contract.
    async fn get_market_data(&self, contract_id: ContractId) -> Result<MarketData>;

    /// Retrieve historical bars for a contract.
    async fn get_historical_data(
        &self,
        contract_id: ContractId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalData>>;

    /// Retrieve the risk limits for an account.
    async fn get_risk_limits(&self, account_id: AccountId) -> Result<RiskLimit>;

    /// Update the risk limits for an account.
    async fn set_risk_limits(&self, limits: RiskLimit) -> Result<()>;
}

#[async_trait]
impl TradovateApi for TradovateClient {
    async fn authenticate(&self) -> Result<AccessToken> {
        TradovateClient::authenticate(self).await
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.accounts().list().await
    }

    async fn get_positions(&self) -> Result<Vec<Position>> {
        self.accounts().positions().await
    }

    async fn get_contracts(&self) -> Result<Vec<Contract>> {
        self.market_data().contracts().await
    }

    async fn place_order(&self, order: Order) -> Result<Order> {
        self.orders().place(&order).await
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<()> {
        self.orders().cancel(order_id).await
    }

    async fn get_fills(&self, order_id: OrderId) -> Result<Vec<Fill>> {
        self.orders().fills(order_id).await
    }

    async fn get_market_data(&self, contract_id: ContractId) -> Result<MarketData> {
        self.market_data().quote(contract_id).await
    }

    async fn get_historical_data(
        &self,
        contract_id: ContractId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalData>> {
        self.market_data()
            .historical(contract_id, start_time, end_time, interval)
            .await
    }

    async fn get_risk_limits(&self, account_id: AccountId) -> Result<RiskLimit> {
        self.accounts().risk_limits(account_id).await
    }

    async fn set_risk_limits(&self, limits: RiskLimit) -> Result<()> {
        self.accounts().set_risk_limits(&limits).await
    }
}
