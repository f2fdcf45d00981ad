//! Typed shapes of the IAM API responses the report consumes.
//!
//! Each record declares only the fields the report reads; serde skips the
//! rest of the response body. Decoding happens at the fetch boundary, so a
//! response missing a declared field fails there as a decode error naming
//! the operation, not at the point of use.

use serde::{Deserialize, Serialize};

/// One access group of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroup {
    /// Provider-assigned group ID
    pub id: String,
    /// Human-readable group name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Continuation link to a further page of a listing. The URL is absolute
/// and dereferenceable with the bearer token alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
}

/// One page of the access group listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupPage {
    /// Groups carried by this page, in receipt order
    pub groups: Vec<AccessGroup>,
    /// Link to the next page; absent on the terminal page
    pub next: Option<PageLink>,
}

/// A name/value pair on a policy subject or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// The principal side of a policy grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Identity attributes; the report displays the first one
    pub attributes: Vec<Attribute>,
}

/// One role a policy grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub display_name: String,
}

/// The resource side of a policy grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Attributes naming and scoping the resource
    pub attributes: Vec<Attribute>,
}

/// One policy: subjects granted roles over resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub subjects: Vec<Subject>,
    pub roles: Vec<Role>,
    pub resources: Vec<ResourceSpec>,
}

/// Response shape of the policy listing. The listing is consumed as a single
/// page; no continuation link is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyPage {
    pub policies: Vec<Policy>,
}

/// The part of the token exchange response the report consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token for every subsequent call
    pub access_token: String,
}

/// The part of the API key detail response the report consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyDetails {
    /// Account the API key belongs to
    pub account_id: String,
}
