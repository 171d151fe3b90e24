use thiserror::Error;

/// Failure reported by a [`crate::release::lookup::ReleaseLookup`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No results for bundle identifier")]
    NoResults,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LookupError::Decode(e.to_string())
        } else if e.is_builder() {
            LookupError::InvalidRequest(e.to_string())
        } else {
            LookupError::Network(e.to_string())
        }
    }
}

/// Failure of a release check.
///
/// Wrapped causes are kept as their description, so two errors are equal
/// when they have the same kind and the same message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Invalid URL configuration: {0}")]
    InvalidUrl(String),

    #[error("No app results found")]
    NoResults,

    #[error("No app information available")]
    NoAppInformationAvailable,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("General error: {0}")]
    General(String),
}

impl From<LookupError> for CheckError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::InvalidRequest(cause) => CheckError::InvalidUrl(cause),
            LookupError::NoResults => CheckError::NoResults,
            LookupError::Network(cause) => CheckError::Network(cause),
            LookupError::Decode(cause) => CheckError::Decode(cause),
            LookupError::Other(cause) => CheckError::General(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        LookupError::InvalidRequest("empty bundle id".to_string()),
        CheckError::InvalidUrl("empty bundle id".to_string())
    )]
    #[case(LookupError::NoResults, CheckError::NoResults)]
    #[case(
        LookupError::Network("timed out".to_string()),
        CheckError::Network("timed out".to_string())
    )]
    #[case(
        LookupError::Decode("expected value".to_string()),
        CheckError::Decode("expected value".to_string())
    )]
    #[case(
        LookupError::Other("task panicked".to_string()),
        CheckError::General("task panicked".to_string())
    )]
    fn lookup_error_maps_one_to_one(#[case] lookup: LookupError, #[case] expected: CheckError) {
        assert_eq!(CheckError::from(lookup), expected);
    }

    #[test]
    fn wrapped_errors_compare_by_description() {
        assert_eq!(
            CheckError::Network("timed out".to_string()),
            CheckError::Network("timed out".to_string())
        );
        assert_ne!(
            CheckError::Network("timed out".to_string()),
            CheckError::Network("connection refused".to_string())
        );
        assert_ne!(
            CheckError::Network("timed out".to_string()),
            CheckError::General("timed out".to_string())
        );
    }

    #[test]
    fn check_error_messages() {
        assert_eq!(CheckError::NoResults.to_string(), "No app results found");
        assert_eq!(
            CheckError::Decode("missing field".to_string()).to_string(),
            "Failed to decode response: missing field"
        );
    }
}
