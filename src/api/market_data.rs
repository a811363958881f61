//! Market data service for contracts, quotes, and historical bars.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{Contract, ContractId, HistoricalData, MarketData};
use crate::Result;

/// Service for market data operations.
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

/// Query parameters for historical bars. Timestamps travel as unix
/// seconds on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoricalQuery<'a> {
    contract_id: ContractId,
    start_time: i64,
    end_time: i64,
    interval: &'a str,
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all available contracts.
    pub async fn contracts(&self) -> Result<Vec<Contract>> {
        self.inner.get("/contract/list").await
    }

    /// Get the current quote for a contract.
    pub async fn quote(&self, contract_id: ContractId) -> Result<MarketData> {
        self.inner
            .get(&format!("/md/getQuote/{}", contract_id))
            .await
    }

    /// Get historical bars for a contract.
    ///
    /// `interval` is an API interval string such as `"1m"`, `"5m"`, or
    /// `"1h"`.
    pub async fn historical(
        &self,
        contract_id: ContractId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalData>> {
        let query = HistoricalQuery {
            contract_id,
            start_time: start_time.timestamp(),
            end_time: end_time.timestamp(),
            interval,
        };
        self.inner.get_with_query("/md/historical", &query).await
    }
}
