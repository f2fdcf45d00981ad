//! Phase two: policies granted directly to the principal or account, with
//! the optional service ID drill-down.

use std::io::Write;

use super::render::render_policy;
use super::{log_record, AccessReportService, ReportOptions};
use crate::error::ReportResult;
use crate::types::Policy;

/// Attribute marking what kind of resource a policy covers.
const RESOURCE_TYPE_ATTRIBUTE: &str = "resourceType";
/// Marker value for service ID resources.
const SERVICE_ID_RESOURCE_TYPE: &str = "serviceid";
/// Attribute carrying the ID of the covered resource itself.
const RESOURCE_ATTRIBUTE: &str = "resource";

/// Separator printed above the section header.
const SECTION_SEPARATOR: &str = "================================";

impl AccessReportService {
    /// Print the authorizations section: policies granted directly to the
    /// principal, or account-wide when no principal is set. With the
    /// extended report enabled, each policy over a service ID is followed
    /// by the full record of that service ID.
    pub(crate) async fn report_authorizations<W: Write>(
        &self,
        options: &ReportOptions,
        out: &mut W,
    ) -> ReportResult<()> {
        writeln!(out)?;
        writeln!(out, "{SECTION_SEPARATOR}")?;
        writeln!(out, "Authorizations:")?;

        let policies = self
            .client
            .list_policies(
                &self.token,
                &self.account_id,
                options.iam_id.as_deref(),
                None,
            )
            .await?;
        log_record("authorizations", &policies);

        for policy in &policies {
            render_policy(out, policy)?;
            if options.include_service_ids {
                self.dump_service_ids(policy, out).await?;
            }
        }
        Ok(())
    }

    /// Dump the record of every service ID the policy's first resource entry
    /// names, if that entry is marked as a service ID resource.
    async fn dump_service_ids<W: Write>(&self, policy: &Policy, out: &mut W) -> ReportResult<()> {
        let Some(resource) = policy.resources.first() else {
            return Ok(());
        };
        let covers_service_id = resource
            .attributes
            .iter()
            .any(|a| a.name == RESOURCE_TYPE_ATTRIBUTE && a.value == SERVICE_ID_RESOURCE_TYPE);
        if !covers_service_id {
            return Ok(());
        }
        for attribute in resource
            .attributes
            .iter()
            .filter(|a| a.name == RESOURCE_ATTRIBUTE)
        {
            let record = self
                .client
                .service_id_details(&self.token, &attribute.value)
                .await?;
            log_record("service ID record", &record);
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        }
        Ok(())
    }
}
