/*
[INPUT]:  Order requests, listing filters and cancel selectors
[OUTPUT]: Order creation, listing and cancellation responses
[POS]:    HTTP layer - trading endpoints (signed)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{ApiRequest, FoxbitClient, Result};
use crate::types::{
    CancelOrderRequest, CancelOrdersResponse, CreateOrderRequest, CreateOrderResponse,
    ListOrdersQuery, OrderId, OrdersPage,
};

const ORDERS_PATH: &str = "/rest/v3/orders";
const CANCEL_ORDERS_PATH: &str = "/rest/v3/orders/cancel";

impl FoxbitClient {
    /// Create a new order
    ///
    /// POST /rest/v3/orders
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<CreateOrderResponse> {
        self.send_json(&ApiRequest::post(ORDERS_PATH).with_json(req)?)
            .await
    }

    pub async fn create_order_raw(&self, req: &CreateOrderRequest) -> Result<String> {
        self.execute(&ApiRequest::post(ORDERS_PATH).with_json(req)?)
            .await
    }

    /// List orders matching the filters
    ///
    /// GET /rest/v3/orders?market_symbol={symbol}&state={state}&...
    pub async fn list_orders(&self, query: &ListOrdersQuery) -> Result<OrdersPage> {
        self.send_json(&ApiRequest::get(ORDERS_PATH).with_params(query.to_params()))
            .await
    }

    pub async fn list_orders_raw(&self, query: &ListOrdersQuery) -> Result<String> {
        self.execute(&ApiRequest::get(ORDERS_PATH).with_params(query.to_params()))
            .await
    }

    /// Active orders for one market
    pub async fn list_active_orders(&self, market_symbol: &str) -> Result<OrdersPage> {
        self.list_orders(&ListOrdersQuery::active(market_symbol))
            .await
    }

    /// Cancel orders selected by id, market or all
    ///
    /// PUT /rest/v3/orders/cancel
    pub async fn cancel_order(&self, req: &CancelOrderRequest) -> Result<CancelOrdersResponse> {
        self.send_json(&ApiRequest::put(CANCEL_ORDERS_PATH).with_json(req)?)
            .await
    }

    pub async fn cancel_order_raw(&self, req: &CancelOrderRequest) -> Result<String> {
        self.execute(&ApiRequest::put(CANCEL_ORDERS_PATH).with_json(req)?)
            .await
    }

    pub async fn cancel_order_by_id(&self, id: &OrderId) -> Result<CancelOrdersResponse> {
        self.cancel_order(&CancelOrderRequest::by_id(id.clone()))
            .await
    }
}
