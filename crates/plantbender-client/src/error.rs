use std::fmt;

use reqwest::StatusCode;

/// Result type for plantbender-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single backend call.
///
/// Callers only distinguish these for messaging; nothing is retried.
#[derive(Debug)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure; no response was received
    Network(String),

    /// The server answered with a non-2xx status
    Status(StatusCode),

    /// The response body is not a records array
    Decode(String),

    /// Base URL or endpoint could not be built
    InvalidUrl(String),

    /// Client configuration is incomplete
    Config(String),
}

impl ApiError {
    /// True for failures where no HTTP response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Short reason suitable for a notification.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Status(status) => format!("server responded with {}", status),
            ApiError::Network(msg)
            | ApiError::Decode(msg)
            | ApiError::InvalidUrl(msg)
            | ApiError::Config(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(status) => write!(f, "Request rejected: HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.without_url().to_string());
        }

        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect to server".to_string()
        } else {
            // The request URL carries the access code; keep it out of messages and logs.
            err.without_url().to_string()
        };
        ApiError::Network(reason)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_not_network() {
        let err = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_network());
        assert_eq!(err.reason(), "server responded with 500 Internal Server Error");
    }

    #[test]
    fn test_network_reason_is_message() {
        let err = ApiError::Network("could not connect to server".to_string());
        assert!(err.is_network());
        assert_eq!(err.reason(), "could not connect to server");
        assert_eq!(err.to_string(), "Network error: could not connect to server");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Malformed response"));
    }
}
