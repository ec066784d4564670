/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{OrderState, OrderType, Side};
use super::models::{OrderId, serde_helpers};
use crate::http::{FoxbitError, Result};

/// `GET /rest/v3/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub data: Vec<Ticker>,
}

impl TickerResponse {
    pub fn first(&self) -> Option<&Ticker> {
        self.data.first()
    }

    /// `data[0].best.bid.price`
    pub fn best_bid_price(&self) -> Result<Decimal> {
        self.first()
            .and_then(|ticker| ticker.best.as_ref())
            .and_then(|best| best.bid.as_ref())
            .and_then(|bid| bid.price)
            .ok_or_else(|| FoxbitError::missing_field("data[0].best.bid.price"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub market_symbol: String,
    #[serde(default)]
    pub last_trade: Option<LastTrade>,
    #[serde(default)]
    pub rolling_24h: Option<Rolling24h>,
    #[serde(default)]
    pub best: Option<BestQuotes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrade {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rolling24h {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price_change: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price_change_percent: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub volume: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub open: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub high: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub low: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestQuotes {
    #[serde(default)]
    pub ask: Option<Quote>,
    #[serde(default)]
    pub bid: Option<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub volume: Option<Decimal>,
}

/// `POST /rest/v3/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub id: OrderId,
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
}

/// `GET /rest/v3/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    #[serde(default)]
    pub data: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub market_symbol: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub state: Option<OrderState>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub price_avg: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_opt")]
    pub quantity_executed: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `PUT /rest/v3/orders/cancel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrdersResponse {
    #[serde(default)]
    pub data: Vec<CancelledOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelledOrder {
    #[serde(default)]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub sn: Option<String>,
}
