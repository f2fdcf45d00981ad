//! Access group listing with continuation-link pagination.

use log::debug;
use uuid::Uuid;

use super::client::IamClient;
use super::ApiResult;
use crate::types::{AccessGroup, GroupPage};

const GROUPS_PATH: &str = "/v2/groups";
const PAGE_LIMIT: u32 = 100;
const TRANSACTION_ID_HEADER: &str = "Transaction-Id";

impl IamClient {
    /// List the access groups of an account, optionally narrowed to the
    /// groups one IAM ID belongs to.
    ///
    /// Continuation links are followed until a page carries none, and items
    /// accumulate in receipt order. The links are self-describing, so
    /// follow-up requests reapply the bearer token and the transaction ID
    /// but not the original query. No page-count bound is enforced: a server
    /// that keeps returning links keeps this call iterating.
    pub async fn list_access_groups(
        &self,
        token: &str,
        account_id: &str,
        iam_id: Option<&str>,
    ) -> ApiResult<Vec<AccessGroup>> {
        let operation = "access group listing";
        // One transaction ID spans the whole page chain so the calls
        // correlate server-side.
        let transaction_id = Uuid::new_v4().to_string();

        let url = self.endpoint(GROUPS_PATH)?;
        debug!("GET {url}");
        let mut query = vec![
            ("account_id", account_id.to_string()),
            ("hide_public_access", "true".to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if let Some(iam_id) = iam_id {
            query.push(("iam_id", iam_id.to_string()));
        }
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(TRANSACTION_ID_HEADER, transaction_id.as_str())
            .query(&query);
        let GroupPage {
            mut groups,
            mut next,
        } = self.fetch_json(operation, request).await?;

        while let Some(link) = next {
            debug!("GET {} (continuation)", link.href);
            let request = self
                .http
                .get(link.href)
                .bearer_auth(token)
                .header(TRANSACTION_ID_HEADER, transaction_id.as_str());
            let page: GroupPage = self.fetch_json(operation, request).await?;
            groups.extend(page.groups);
            next = page.next;
        }
        Ok(groups)
    }
}
