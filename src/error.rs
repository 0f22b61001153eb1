//! Error types for the search pipeline.
//!
//! Only [`SearchError::InvalidConfiguration`] and [`SearchError::Settings`]
//! are ever returned to a caller as hard errors. [`SearchError::ProviderQuery`]
//! describes a single failed query variant; the pipeline recovers from it and
//! hands its message to the observer as a warning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A run was requested with parameters outside the supported set.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// One query variant failed at the provider.
    #[error("Error searching for '{term}': {message}")]
    ProviderQuery { term: String, message: String },

    /// The provider settings file could not be read or parsed.
    #[error("failed to load settings from {path}: {message}")]
    Settings { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_query_message() {
        let err = SearchError::ProviderQuery {
            term: "Sen. Moran".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(err.to_string(), "Error searching for 'Sen. Moran': timed out");
    }

    #[test]
    fn test_invalid_configuration_message() {
        let err = SearchError::InvalidConfiguration("days must be one of 1, 3, 7, 14, 30".into());
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
