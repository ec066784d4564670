/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::{CancelType, OrderState, OrderType, Side};
use super::models::OrderId;
use crate::http::QueryParams;

/// Timestamp layout accepted by the orders listing filters
pub const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of `POST /rest/v3/orders`; field order is the serialized order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub market_symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl CreateOrderRequest {
    pub fn limit(
        market_symbol: impl Into<String>,
        side: Side,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            market_symbol: market_symbol.into(),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            quantity,
            client_order_id: None,
        }
    }

    pub fn market(market_symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            market_symbol: market_symbol.into(),
            side,
            order_type: OrderType::Market,
            price: None,
            quantity,
            client_order_id: None,
        }
    }

    pub fn client_order_id(self, client_order_id: impl Into<String>) -> Self {
        Self {
            client_order_id: Some(client_order_id.into()),
            ..self
        }
    }
}

/// Filters for `GET /rest/v3/orders`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOrdersQuery {
    pub market_symbol: Option<String>,
    pub state: Option<OrderState>,
    pub side: Option<Side>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl ListOrdersQuery {
    /// `{market_symbol, state=ACTIVE}`
    pub fn active(market_symbol: impl Into<String>) -> Self {
        Self {
            market_symbol: Some(market_symbol.into()),
            state: Some(OrderState::Active),
            ..Self::default()
        }
    }

    pub fn start_time(self, start_time: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start_time),
            ..self
        }
    }

    pub fn end_time(self, end_time: DateTime<Utc>) -> Self {
        Self {
            end_time: Some(end_time),
            ..self
        }
    }

    pub fn side(self, side: Side) -> Self {
        Self {
            side: Some(side),
            ..self
        }
    }

    pub fn page(self, page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..self
        }
    }

    /// Unset filters are left out of the query
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(symbol) = &self.market_symbol {
            params.insert("market_symbol".to_string(), symbol.clone());
        }
        if let Some(state) = self.state {
            params.insert("state".to_string(), state.as_ref().to_string());
        }
        if let Some(side) = self.side {
            params.insert("side".to_string(), side.as_ref().to_string());
        }
        if let Some(start) = self.start_time {
            params.insert("start_time".to_string(), format_api_time(&start));
        }
        if let Some(end) = self.end_time {
            params.insert("end_time".to_string(), format_api_time(&end));
        }
        if let Some(page_size) = self.page_size {
            params.insert("page_size".to_string(), page_size.to_string());
        }
        if let Some(page) = self.page {
            params.insert("page".to_string(), page.to_string());
        }
        params
    }
}

pub fn format_api_time(time: &DateTime<Utc>) -> String {
    time.format(API_TIME_FORMAT).to_string()
}

/// Body of `PUT /rest/v3/orders/cancel`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelOrderRequest {
    #[serde(rename = "type")]
    pub cancel_type: CancelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_symbol: Option<String>,
}

impl CancelOrderRequest {
    /// `{"type":"ID","id":"<id>"}`
    pub fn by_id(id: impl Into<OrderId>) -> Self {
        Self {
            cancel_type: CancelType::Id,
            id: Some(id.into()),
            market_symbol: None,
        }
    }

    /// Every open order in one market
    pub fn by_market(market_symbol: impl Into<String>) -> Self {
        Self {
            cancel_type: CancelType::Market,
            id: None,
            market_symbol: Some(market_symbol.into()),
        }
    }

    pub fn all() -> Self {
        Self {
            cancel_type: CancelType::All,
            id: None,
            market_symbol: None,
        }
    }
}
