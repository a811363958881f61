//! Orders service for order placement, cancellation, and fills.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Fill, Order, OrderId};
use crate::Result;

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use tradovate_bridge::models::{
///     AccountId, ContractId, Order, OrderType, TimeInForce,
/// };
///
/// # async fn example(client: tradovate_bridge::TradovateClient) -> tradovate_bridge::Result<()> {
/// let order = Order::new(
///     AccountId::new(12345),
///     ContractId::new(54321),
///     OrderType::Limit,
///     10,
///     TimeInForce::Day,
/// )
/// .with_price(100.50);
///
/// let placed = client.orders().place(&order).await?;
/// println!("order id: {:?}", placed.id);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Submit a new order.
    ///
    /// Returns the server's echo of the order with its assigned ID and
    /// status fields populated.
    pub async fn place(&self, order: &Order) -> Result<Order> {
        self.inner.post("/order/placeOrder", order).await
    }

    /// Cancel an existing order by its ID.
    pub async fn cancel(&self, order_id: OrderId) -> Result<()> {
        self.inner
            .delete_expect_ok(&format!("/order/cancel/{}", order_id))
            .await
    }

    /// List all fills for an order.
    pub async fn fills(&self, order_id: OrderId) -> Result<Vec<Fill>> {
        self.inner.get(&format!("/fill/list/{}", order_id)).await
    }
}
