//! Phase one: access groups and the policies attached to them.

use std::io::Write;

use log::info;

use super::render::{render_group, render_policy};
use super::{log_record, AccessReportService, ReportOptions};
use crate::error::ReportResult;

impl AccessReportService {
    /// Print the access group section: the section header, then every group
    /// in scope, each followed by the policies attached to it.
    ///
    /// The header prints before the listing call, so it appears even when
    /// the account has no groups or the listing fails.
    pub(crate) async fn report_access_groups<W: Write>(
        &self,
        options: &ReportOptions,
        out: &mut W,
    ) -> ReportResult<()> {
        writeln!(out)?;
        writeln!(out, "Access Groups:")?;

        let groups = self
            .client
            .list_access_groups(&self.token, &self.account_id, options.iam_id.as_deref())
            .await?;
        info!("{} access groups in scope", groups.len());
        log_record("access groups", &groups);

        for group in &groups {
            render_group(out, group)?;
            let policies = self
                .client
                .list_policies(&self.token, &self.account_id, None, Some(&group.id))
                .await?;
            log_record("access group policies", &policies);
            for policy in &policies {
                render_policy(out, policy)?;
            }
        }
        Ok(())
    }
}
