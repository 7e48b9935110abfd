use std::fmt;

/// Result type for plantbender-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Activation value outside the accepted vocabulary
    InvalidActivation(String),

    /// Timestamp string that is neither RFC 3339 nor a naive ISO-8601 instant
    InvalidTimestamp(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidActivation(value) => write!(
                f,
                "Invalid activation value '{}' (expected 1, 0, start, stop, on or off)",
                value
            ),
            Error::InvalidTimestamp(value) => write!(f, "Invalid timestamp: {}", value),
        }
    }
}

impl std::error::Error for Error {}
