//! Core logic of the IAM access report tool:
//! - credential loading and API key to bearer token exchange
//! - access group and policy retrieval, with continuation-link pagination
//! - the two-phase console report (access groups, then direct authorizations)
//!
//! The crate talks to the IBM Cloud IAM REST API and renders what it fetches
//! as an indented plain-text report on a caller-supplied writer. Fetched
//! records can additionally be dumped to the log for inspection.

mod credentials;
mod error;
pub mod iam;
pub mod report;
mod types;

// Re-exports for a small, focused public API
pub use credentials::read_api_key;
pub use error::{ReportError, ReportResult};
pub use iam::{ApiError, ApiResult, IamClient, DEFAULT_IAM_ENDPOINT};
pub use report::render::{render_group, render_policy};
pub use report::{AccessReportService, ReportOptions};
pub use types::{
    AccessGroup, ApiKeyDetails, Attribute, GroupPage, PageLink, Policy, PolicyPage, ResourceSpec,
    Role, Subject, TokenResponse,
};
