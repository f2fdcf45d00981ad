//! IBM Cloud IAM REST API integration.
//!
//! [`IamClient`] owns the HTTP connection pool and the base endpoint; the
//! submodules add one method per API operation. Bearer tokens are arguments,
//! not client state, so the credential → token → listings flow stays visible
//! at the call sites.

mod account;
mod client;
mod groups;
mod policies;
mod service_ids;
mod token;

pub use client::{IamClient, DEFAULT_IAM_ENDPOINT};

use thiserror::Error;

/// Result type alias for IAM API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised while talking to the IAM API.
///
/// Every variant except `Endpoint` and `Client` names the logical operation
/// that failed, so a mid-report failure reads as "policy listing returned
/// HTTP 403" rather than a bare status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured endpoint is not a usable base URL
    #[error("invalid IAM endpoint '{endpoint}': {source}")]
    Endpoint {
        /// The endpoint text as configured
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build the HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced an HTTP response
    #[error("{operation} request failed")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{operation} returned HTTP {status}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    /// The response body does not match the expected record shape
    #[error("{operation} response is malformed")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Create a transport error for a request that never got a response
    pub(crate) fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    /// Create a status error for a non-success response
    pub(crate) fn status(operation: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Status { operation, status }
    }

    /// Create a decode error for a body that did not match its record shape
    pub(crate) fn decode(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Decode { operation, source }
    }
}
