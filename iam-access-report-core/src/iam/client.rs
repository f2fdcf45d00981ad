//! HTTP client wrapper for the IAM API.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiError, ApiResult};

/// Production IAM API host.
pub const DEFAULT_IAM_ENDPOINT: &str = "https://iam.cloud.ibm.com";

const USER_AGENT: &str = concat!("iam-access-report/", env!("CARGO_PKG_VERSION"));

/// Client for the IAM REST API.
///
/// Holds the connection pool and the base endpoint URL and nothing else:
/// bearer tokens travel as call arguments. One instance serves a whole
/// report run.
#[derive(Debug)]
pub struct IamClient {
    pub(crate) http: reqwest::Client,
    base_url: Url,
}

impl IamClient {
    /// Create a client against an IAM endpoint, usually
    /// [`DEFAULT_IAM_ENDPOINT`].
    pub fn new(endpoint: &str) -> ApiResult<Self> {
        let base_url = Url::parse(endpoint).map_err(|source| ApiError::Endpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { http, base_url })
    }

    /// Resolve an API path against the configured endpoint.
    pub(crate) fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url.join(path).map_err(|source| ApiError::Endpoint {
            endpoint: format!("{}{path}", self.base_url),
            source,
        })
    }

    /// Send a request and decode the JSON response body into `T`.
    ///
    /// Non-success statuses and bodies that do not match `T` both fail here,
    /// at the fetch boundary, with the logical operation named in the error.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(operation, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(operation, status));
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::decode(operation, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_an_unparseable_endpoint() {
        let err = IamClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::Endpoint { .. }));
    }

    #[test]
    fn test_resolves_paths_against_the_endpoint() {
        let client = IamClient::new("http://127.0.0.1:9000").unwrap();
        let url = client.endpoint("/v2/groups").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/v2/groups");
    }
}
