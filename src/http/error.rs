//! Failure taxonomy for a single upstream request.

use reqwest::StatusCode;

/// Everything that can go wrong while fetching one JSON document.
///
/// Requests are attempted exactly once, so no variant is marked retryable.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    Transport(reqwest::Error),
    /// The server answered outside the 2xx range.
    Status(StatusCode),
    /// The body could not be read or decoded as the expected JSON shape.
    Decode(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Status(status) => write!(f, "HTTP {}", status.as_u16()),
            FetchError::Decode(e) => write!(f, "invalid JSON response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) | FetchError::Decode(e) => Some(e),
            FetchError::Status(_) => None,
        }
    }
}
