//! `TmdbError` - structured failures surfaced by the client.

use reqwest::StatusCode;

/// Errors returned by [`TmdbClient`](crate::TmdbClient) and lazy accessors.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// The startup `configuration` request failed.
    #[error("failed to load TMDB configuration: {0}")]
    Initialization(#[source] Box<TmdbError>),

    /// The `configuration` endpoint answered without an image base URL.
    #[error("TMDB configuration is empty, verify that the API key is valid")]
    EmptyConfiguration,

    /// A required builder field was not set.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The base URL could not be parsed or joined with a resource path.
    #[error("invalid URL for {path}: {source}")]
    InvalidUrl {
        /// Resource path being requested.
        path: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// A caller-supplied path segment was empty, `.` or `..`.
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Network or protocol failure while talking to the API.
    #[error("request failed: {path}: {source}")]
    Transport {
        /// Resource path being requested.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("TMDB API error (HTTP {status}): code={code:?}, message={message}")]
    Status {
        /// HTTP status.
        status: StatusCode,
        /// TMDB `status_code`, when the body carried one.
        code: Option<u32>,
        /// TMDB `status_message`, or the raw body.
        message: String,
    },

    /// HTTP 429 persisted through every retry.
    #[error("TMDB API rate limit exceeded after {retries} retries: {path}")]
    RateLimited {
        /// Resource path being requested.
        path: String,
        /// Number of retries attempted.
        retries: u32,
    },

    /// The body was not JSON, or not the expected shape.
    #[error("failed to decode JSON response: {path}: {source}")]
    Decode {
        /// Resource path being requested.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A lazy field was accessed on an object with no live client.
    #[error("object is not attached to a live TMDB client")]
    Detached,
}

/// Result alias used across the crate.
pub type Result<T, E = TmdbError> = std::result::Result<T, E>;

impl TmdbError {
    /// Returns `true` when the API reported the resource as missing (HTTP 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        // Arrange & Act
        let err = TmdbError::MissingField("api_key");

        // Assert
        assert_eq!(err.to_string(), "api_key is required");
    }

    #[test]
    fn test_initialization_wraps_source() {
        // Arrange
        let err = TmdbError::Initialization(Box::new(TmdbError::EmptyConfiguration));

        // Act
        let source = std::error::Error::source(&err);

        // Assert
        assert!(err.to_string().contains("failed to load TMDB configuration"));
        assert!(source.is_some());
    }

    #[test]
    fn test_is_not_found() {
        // Arrange
        let not_found = TmdbError::Status {
            status: StatusCode::NOT_FOUND,
            code: Some(34),
            message: String::from("The resource you requested could not be found."),
        };
        let unauthorized = TmdbError::Status {
            status: StatusCode::UNAUTHORIZED,
            code: Some(7),
            message: String::from("Invalid API key"),
        };

        // Act & Assert
        assert!(not_found.is_not_found());
        assert!(!unauthorized.is_not_found());
        assert!(!TmdbError::Detached.is_not_found());
    }
}
