/// Errors surfaced by the tower client.
///
/// Only local failures and transport failures become errors. A request that
/// reaches the server but comes back with a non-2xx status is reported by the
/// calling operation itself (usually as `false` or `None` plus a log line).
#[derive(Debug, thiserror::Error)]
pub enum TowerError {
    /// A value was rejected by client-side validation before any request.
    #[error("{0}")]
    InvalidValue(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded as the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client configuration is missing or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type TowerResult<T> = Result<T, TowerError>;
