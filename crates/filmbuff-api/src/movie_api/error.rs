//! Error types for the movie API connector.

/// Connector construction failure.
///
/// Raised before any network I/O; the connector cannot work without a
/// base URL and an API key.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    /// `api_base_url` is empty or unset.
    MissingBaseUrl,
    /// `api_key` is empty or unset.
    MissingApiKey,
    /// The HTTP client could not be built.
    HttpClient(reqwest::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBaseUrl => write!(f, "Movie API base URL is missing"),
            Self::MissingApiKey => write!(f, "Movie API key is missing"),
            Self::HttpClient(e) => write!(f, "failed to build HTTP client: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(e) => Some(e),
            Self::MissingBaseUrl | Self::MissingApiKey => None,
        }
    }
}

/// Category of a failed discovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum DiscoverErrorKind {
    /// Connection, timeout or body read failure.
    Transport,
    /// Non-2xx HTTP status.
    Status,
    /// Response body is not valid JSON.
    Decode,
    /// Valid JSON in an unexpected layout.
    UnexpectedShape,
    /// Anything else.
    Unexpected,
}

impl std::fmt::Display for DiscoverErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Decode => "decode",
            Self::UnexpectedShape => "unexpected_shape",
            Self::Unexpected => "unexpected",
        };
        f.write_str(name)
    }
}

/// Discovery request failure.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum DiscoverError {
    /// The request could not be sent or the body could not be read.
    Transport(reqwest::Error),
    /// The API answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// TMDB `status_message`, or the raw body when it has none.
        message: String,
    },
    /// The body is not valid JSON.
    Decode(serde_json::Error),
    /// The body is JSON but not `{"results": [{...}, ...]}`.
    UnexpectedShape(String),
    /// Any other failure while preparing or running the request, including
    /// a base URL that is not an absolute URL.
    Unexpected(String),
}

impl DiscoverError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> DiscoverErrorKind {
        match self {
            Self::Transport(_) => DiscoverErrorKind::Transport,
            Self::Status { .. } => DiscoverErrorKind::Status,
            Self::Decode(_) => DiscoverErrorKind::Decode,
            Self::UnexpectedShape(_) => DiscoverErrorKind::UnexpectedShape,
            Self::Unexpected(_) => DiscoverErrorKind::Unexpected,
        }
    }
}

impl std::fmt::Display for DiscoverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Movie API request failed: {e}"),
            Self::Status { status, message } => {
                write!(f, "Movie API error (HTTP {status}): {message}")
            }
            Self::Decode(e) => write!(f, "Error decoding Movie API response: {e}"),
            Self::UnexpectedShape(detail) => {
                write!(f, "Unexpected Movie API response shape: {detail}")
            }
            Self::Unexpected(detail) => {
                write!(f, "Unexpected error during Movie API request: {detail}")
            }
        }
    }
}

impl std::error::Error for DiscoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Status { .. } | Self::UnexpectedShape(_) | Self::Unexpected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::MissingBaseUrl.to_string(),
            "Movie API base URL is missing"
        );
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "Movie API key is missing"
        );
    }

    #[test]
    fn test_discover_error_kind() {
        // Arrange
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        // Act & Assert
        assert_eq!(
            DiscoverError::Decode(decode).kind(),
            DiscoverErrorKind::Decode
        );
        assert_eq!(
            DiscoverError::Status {
                status: 401,
                message: String::from("Invalid API key"),
            }
            .kind(),
            DiscoverErrorKind::Status
        );
        assert_eq!(
            DiscoverError::Unexpected(String::from("boom")).kind(),
            DiscoverErrorKind::Unexpected
        );
    }

    #[test]
    fn test_status_error_display() {
        // Arrange
        let err = DiscoverError::Status {
            status: 401,
            message: String::from("Invalid API key"),
        };

        // Act & Assert
        assert_eq!(
            err.to_string(),
            "Movie API error (HTTP 401): Invalid API key"
        );
    }

    #[test]
    fn test_decode_error_has_source() {
        // Arrange
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DiscoverError::Decode(decode);

        // Act & Assert
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Error decoding Movie API response"));
    }
}
