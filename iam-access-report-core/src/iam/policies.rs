//! Policy listing with optional principal and group selectors.

use log::debug;

use super::client::IamClient;
use super::ApiResult;
use crate::types::{Policy, PolicyPage};

const POLICIES_PATH: &str = "/v1/policies";

impl IamClient {
    /// List the policies of an account, optionally narrowed by the IAM ID
    /// they are granted to or by the access group they are attached to.
    ///
    /// Callers pick at most one selector per call; passing both is not
    /// rejected here and simply forwards both filters. Only the first page
    /// the service returns is consumed. The listing can paginate server-side
    /// and this call knowingly does not follow it.
    pub async fn list_policies(
        &self,
        token: &str,
        account_id: &str,
        iam_id: Option<&str>,
        access_group_id: Option<&str>,
    ) -> ApiResult<Vec<Policy>> {
        let url = self.endpoint(POLICIES_PATH)?;
        debug!("GET {url}");
        let mut query = vec![("account_id", account_id)];
        if let Some(iam_id) = iam_id {
            query.push(("iam_id", iam_id));
        }
        if let Some(access_group_id) = access_group_id {
            query.push(("access_group_id", access_group_id));
        }
        let request = self.http.get(url).bearer_auth(token).query(&query);
        let page: PolicyPage = self.fetch_json("policy listing", request).await?;
        Ok(page.policies)
    }
}
