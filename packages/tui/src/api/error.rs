//! Analytics API error types
use thiserror::Error;

/// Result type for analytics API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure classes of an analytics request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The service answered with an explicit `{ "error": ... }` payload
    #[error("{0}")]
    Application(String),

    #[error("Network error: {0}")]
    Network(String),

    /// The body could not be decoded into the expected payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Create an application error
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a decoding error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Check if the service itself reported the error
    pub fn is_application_error(&self) -> bool {
        matches!(self, ApiError::Application(_))
    }

    /// Check if this is a transport or decoding failure
    pub fn is_transport_error(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::InvalidResponse(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        let app = ApiError::application("Keyword is required");
        assert!(app.is_application_error());
        assert!(!app.is_transport_error());
        assert_eq!(app.to_string(), "Keyword is required");

        let net = ApiError::network("connection refused");
        assert!(net.is_transport_error());
        assert_eq!(net.to_string(), "Network error: connection refused");

        let bad: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(bad, ApiError::InvalidResponse(_)));
    }
}
