//! Service ID record lookup for the extended report.

use log::debug;
use serde_json::Value;

use super::client::IamClient;
use super::ApiResult;

impl IamClient {
    /// Fetch the full record of a service ID, change history included.
    ///
    /// The record comes back as raw JSON. The extended report dumps it
    /// verbatim instead of interpreting it, so no shape is imposed here.
    pub async fn service_id_details(&self, token: &str, service_id: &str) -> ApiResult<Value> {
        let url = self.endpoint(&format!("/v1/serviceids/{service_id}"))?;
        debug!("GET {url}");
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("include_history", "true")]);
        self.fetch_json("service ID lookup", request).await
    }
}
