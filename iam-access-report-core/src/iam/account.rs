//! Account resolution via API key details.

use log::debug;

use super::client::IamClient;
use super::ApiResult;
use crate::types::ApiKeyDetails;

const API_KEY_DETAILS_PATH: &str = "/v1/apikeys/details";

impl IamClient {
    /// Look up the details of an API key, notably the account it belongs to.
    ///
    /// The identity service wants the key itself in the `IAM-Apikey` header
    /// next to the bearer token.
    pub async fn api_key_details(&self, token: &str, api_key: &str) -> ApiResult<ApiKeyDetails> {
        let url = self.endpoint(API_KEY_DETAILS_PATH)?;
        debug!("GET {url}");
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .header("IAM-Apikey", api_key);
        self.fetch_json("API key detail lookup", request).await
    }
}
