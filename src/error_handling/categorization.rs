//! Error categorization.
//!
//! Maps client errors onto the coarse `FailureKind` buckets used in logs and
//! geocoder statistics.

use super::types::{FailureKind, FetchError};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status errors are checked first, then the transport-level flags in the
/// order reqwest documents them.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.status().is_some() || error.is_status() {
        return FailureKind::Status;
    }

    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() {
        FailureKind::Decode
    } else if error.is_builder() || error.is_request() || error.is_redirect() {
        FailureKind::Request
    } else {
        FailureKind::Other
    }
}

impl FetchError {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Status { .. } => FailureKind::Status,
            FetchError::Decode { .. } => FailureKind::Decode,
            FetchError::Request { source, .. } => categorize_reqwest_error(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_kind() {
        let error = FetchError::Status {
            url: "http://localhost/reverse".to_string(),
            status: 503,
        };
        assert_eq!(error.kind(), FailureKind::Status);
        assert!(error.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_connect_error_is_categorized() {
        // Port 9 on loopback (discard) is closed on test machines.
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .expect_err("connection to a closed port should fail");
        let kind = categorize_reqwest_error(&err);
        assert!(
            matches!(kind, FailureKind::Connect | FailureKind::Request | FailureKind::Other),
            "unexpected kind {kind}"
        );
    }
}
