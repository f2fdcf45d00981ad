//! The two-phase access report.
//!
//! Phase one lists the access groups in scope, each followed by the policies
//! attached to it. Phase two lists the policies granted directly to the
//! principal, or to anything in the account when no principal is given. The
//! phases run strictly in order and print as they go: the report stream is a
//! live append log, and a mid-run failure keeps everything already printed.

mod authorizations;
mod groups;
pub mod render;

use std::fmt;
use std::io::Write;

use log::{info, log_enabled, Level};
use serde::Serialize;

use crate::error::ReportResult;
use crate::iam::IamClient;

/// Report scope switches, shared by both phases.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Principal (user or service ID) to scope the report to. `None` reports
    /// on the whole account.
    pub iam_id: Option<String>,
    /// Also dump the full record of service IDs referenced by policy
    /// resources in phase two.
    pub include_service_ids: bool,
}

/// Authenticated report engine.
///
/// Owns the API client plus the bearer token and account ID every listing
/// call needs. Construction performs the token exchange and the account
/// lookup; everything afterwards reuses their results.
pub struct AccessReportService {
    pub(crate) client: IamClient,
    pub(crate) token: String,
    pub(crate) account_id: String,
}

// The bearer token never reaches logs or error chains, so Debug is written
// by hand instead of derived.
impl fmt::Debug for AccessReportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessReportService")
            .field("client", &self.client)
            .field("token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl AccessReportService {
    /// Authenticate an API key and resolve the account it belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error when the token exchange or the API key lookup fails;
    /// a rejected key surfaces here, before any report output is written.
    pub async fn new(client: IamClient, api_key: &str) -> ReportResult<Self> {
        let token = client.exchange_api_key(api_key).await?;
        info!("obtained a bearer token");
        let details = client.api_key_details(&token.access_token, api_key).await?;
        info!("resolved account {}", details.account_id);
        Ok(Self {
            client,
            token: token.access_token,
            account_id: details.account_id,
        })
    }

    /// Run both report phases against the writer, in order.
    pub async fn run<W: Write>(&self, options: &ReportOptions, out: &mut W) -> ReportResult<()> {
        self.report_access_groups(options, out).await?;
        self.report_authorizations(options, out).await?;
        Ok(())
    }

    // report_access_groups() implementation is in groups.rs
    // report_authorizations() implementation is in authorizations.rs
}

/// Dump a fetched record to the log at info severity.
///
/// Serialization is skipped entirely when info logging is disabled.
pub(crate) fn log_record<T: Serialize>(label: &str, record: &T) {
    if log_enabled!(Level::Info) {
        match serde_json::to_string_pretty(record) {
            Ok(dump) => info!("{label}: {dump}"),
            Err(err) => info!("{label}: <unserializable: {err}>"),
        }
    }
}
