/*
[INPUT]:  Market symbol
[OUTPUT]: 24h ticker with best bid/ask and last trade
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use crate::http::{ApiRequest, FoxbitClient, Result};
use crate::types::TickerResponse;

fn ticker_path(market_symbol: &str) -> String {
    format!("/rest/v3/markets/{market_symbol}/ticker/24hr")
}

impl FoxbitClient {
    /// 24 hour ticker for one market
    ///
    /// GET /rest/v3/markets/{symbol}/ticker/24hr
    pub async fn ticker_24hr(&self, market_symbol: &str) -> Result<TickerResponse> {
        self.send_json(&ApiRequest::get(ticker_path(market_symbol)))
            .await
    }

    pub async fn ticker_24hr_raw(&self, market_symbol: &str) -> Result<String> {
        self.execute(&ApiRequest::get(ticker_path(market_symbol)))
            .await
    }
}
