//! API key to bearer token exchange.

use log::debug;

use super::client::IamClient;
use super::ApiResult;
use crate::types::TokenResponse;

const TOKEN_PATH: &str = "/identity/token";
const API_KEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

impl IamClient {
    /// Exchange an API key for a short-lived bearer token.
    ///
    /// The key travels form-encoded in the request body, never in the URL.
    pub async fn exchange_api_key(&self, api_key: &str) -> ApiResult<TokenResponse> {
        let url = self.endpoint(TOKEN_PATH)?;
        debug!("POST {url}");
        let request = self
            .http
            .post(url)
            .form(&[("grant_type", API_KEY_GRANT_TYPE), ("apikey", api_key)]);
        self.fetch_json("token exchange", request).await
    }
}
