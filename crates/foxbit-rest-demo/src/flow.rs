/*
[INPUT]:  Authenticated client and validated demo configuration
[OUTPUT]: Summary of one place-list-cancel order lifecycle
[POS]:    Demo layer - sequential walkthrough of the signed endpoints
[UPDATE]: When changing the demo sequence or its logging
*/

use chrono::Utc;
use foxbit_rest_adapter::{
    CreateOrderRequest, FoxbitClient, FoxbitError, ListOrdersQuery, OrderId, Result, Side,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::config::DemoConfig;
use crate::pricing::target_price;

/// Outcome of [`run_demo`]
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub best_bid: Decimal,
    pub target_price: Decimal,
    pub order_id: OrderId,
    pub active_orders: usize,
    pub cancelled_orders: usize,
}

/// Member lookup, ticker, limit buy below the best bid, active order
/// listing and cancellation of the created order. Stops at the first error.
pub async fn run_demo(client: &FoxbitClient, config: &DemoConfig) -> Result<DemoReport> {
    info!(access_key = %client.credentials().masked_access_key(), "using access key");

    let member = client.me().await?;
    info!(?member, "member");

    let ticker = client.ticker_24hr(&config.market).await?;
    let best_bid = ticker.best_bid_price()?;
    let price = target_price(best_bid, config.price_factor).ok_or_else(|| {
        FoxbitError::InvalidResponse(format!("target price overflows for best bid {best_bid}"))
    })?;
    info!(market = %config.market, %best_bid, target_price = %price, "ticker");

    let order = CreateOrderRequest::limit(&config.market, Side::Buy, price, config.quantity);
    let created = client.create_order(&order).await?;
    info!(order_id = %created.id, sn = ?created.sn, "order created");

    tokio::time::sleep(config.settle_delay).await;

    let query = ListOrdersQuery::active(&config.market).start_time(Utc::now() - config.lookback);
    let active = client.list_orders(&query).await?;
    info!(count = active.data.len(), "active orders");

    let cancelled = client.cancel_order_by_id(&created.id).await?;
    info!(order_id = %created.id, count = cancelled.data.len(), "order cancelled");

    Ok(DemoReport {
        best_bid,
        target_price: price,
        order_id: created.id,
        active_orders: active.data.len(),
        cancelled_orders: cancelled.data.len(),
    })
}
