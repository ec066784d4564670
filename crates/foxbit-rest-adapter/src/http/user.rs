/*
[INPUT]:  Authenticated client
[OUTPUT]: Account information of the key owner
[POS]:    HTTP layer - member endpoints (signed)
[UPDATE]: When adding new member endpoints
*/

// ### Member Endpoints

use crate::http::{ApiRequest, FoxbitClient, Result};
use crate::types::Member;

const ME_PATH: &str = "/rest/v3/me";

impl FoxbitClient {
    /// Current member information
    ///
    /// GET /rest/v3/me
    pub async fn me(&self) -> Result<Member> {
        self.send_json(&ApiRequest::get(ME_PATH)).await
    }

    pub async fn me_raw(&self) -> Result<String> {
        self.execute(&ApiRequest::get(ME_PATH)).await
    }
}
