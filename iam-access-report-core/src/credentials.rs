//! Credential file loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, ReportResult};

/// On-disk shape of the credential file. Only the API key is interpreted;
/// the exported files carry more fields and serde skips them.
#[derive(Debug, Deserialize)]
struct CredentialFile {
    apikey: Option<String>,
}

/// Read the IAM API key from a JSON credential file.
///
/// The file must be a JSON object with a non-empty string field named
/// `apikey`, the shape the IBM Cloud console exports when an API key is
/// created. The key never appears in errors or logs.
pub fn read_api_key(path: &Path) -> ReportResult<String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| ReportError::credential(path, format!("cannot read file: {err}")))?;
    let parsed: CredentialFile = serde_json::from_str(&raw)
        .map_err(|err| ReportError::credential(path, format!("not a JSON object: {err}")))?;
    match parsed.apikey {
        Some(api_key) if !api_key.is_empty() => Ok(api_key),
        Some(_) => Err(ReportError::credential(path, "the 'apikey' field is empty")),
        None => Err(ReportError::credential(path, "missing the 'apikey' field")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn credential_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write contents");
        file
    }

    #[test]
    fn test_reads_the_api_key_field() {
        let file = credential_file(r#"{"name": "ops key", "apikey": "abc123", "createdAt": "2024-01-01"}"#);
        let key = read_api_key(file.path()).expect("valid credential file");
        assert_eq!(key, "abc123");
    }

    #[test]
    fn test_missing_file_is_a_credential_error() {
        let err = read_api_key(Path::new("/nonexistent/cred.json")).unwrap_err();
        assert!(matches!(err, ReportError::Credential { .. }));
        assert!(err.to_string().contains("cannot read file"));
    }

    #[test]
    fn test_non_json_contents_are_rejected() {
        let file = credential_file("not json at all");
        let err = read_api_key(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_missing_apikey_field_is_rejected() {
        let file = credential_file(r#"{"name": "ops key"}"#);
        let err = read_api_key(file.path()).unwrap_err();
        assert!(err.to_string().contains("missing the 'apikey' field"));
    }

    #[test]
    fn test_empty_apikey_field_is_rejected() {
        let file = credential_file(r#"{"apikey": ""}"#);
        let err = read_api_key(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
