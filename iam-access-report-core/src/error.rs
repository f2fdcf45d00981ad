//! Error handling module

use std::path::PathBuf;

use thiserror::Error;

use crate::iam::ApiError;

/// Result type alias for operations that can fail with `ReportError`
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Every failure class of a report run.
///
/// `Credential` is a configuration problem and surfaces before any network
/// call. The remaining variants abort the run mid-flight; output already
/// written to the report stream stays written.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The credential file is unreadable, not JSON, or missing the API key
    #[error("credential file '{path}': {message}")]
    Credential {
        /// Path of the credential file as given on the command line
        path: PathBuf,
        /// What was wrong with the file
        message: String,
    },

    /// A failure while talking to the IAM API
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A fetched record violates a renderer precondition
    #[error("malformed record: expected {expected}")]
    Structural {
        /// The shape the record was expected to have
        expected: String,
    },

    /// The report output stream rejected a write
    #[error("failed to write report output: {0}")]
    Output(#[from] std::io::Error),

    /// A fetched record could not be serialized for display
    #[error("failed to serialize record for display: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Create a credential file error
    pub(crate) fn credential(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Credential {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a structural error for a record missing an expected element
    pub(crate) fn structural(expected: impl Into<String>) -> Self {
        Self::Structural {
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_credential_error_names_the_file() {
        let err = ReportError::credential(Path::new("/tmp/cred.json"), "missing the 'apikey' field");
        assert_eq!(
            err.to_string(),
            "credential file '/tmp/cred.json': missing the 'apikey' field"
        );
    }

    #[test]
    fn test_structural_error_names_the_expected_shape() {
        let err = ReportError::structural("a policy with at least one subject");
        assert_eq!(
            err.to_string(),
            "malformed record: expected a policy with at least one subject"
        );
    }
}
