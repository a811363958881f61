//! Accounts service for account, position, and risk-limit queries.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Account, AccountId, Position, RiskLimit};
use crate::Result;

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tradovate_bridge::TradovateClient) -> tradovate_bridge::Result<()> {
/// let accounts = client.accounts().list().await?;
/// if let Some(account) = accounts.first() {
///     let limits = client.accounts().risk_limits(account.id).await?;
///     println!("day max loss: {}", limits.day_max_loss);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all accounts for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Account>> {
        self.inner.get("/account/list").await
    }

    /// List all current positions for the authenticated user.
    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.inner.get("/position/list").await
    }

    /// Get the risk limits for an account.
    pub async fn risk_limits(&self, account_id: AccountId) -> Result<RiskLimit> {
        self.inner
            .get(&format!("/account/riskLimits/{}", account_id))
            .await
    }

    /// Update the risk limits for an account.
    ///
    /// The limit fields must already be validated; the server response
    /// body is ignored beyond its status.
    pub async fn set_risk_limits(&self, limits: &RiskLimit) -> Result<()> {
        self.inner
            .post_expect_ok("/account/setRiskLimits", limits)
            .await
    }
}
