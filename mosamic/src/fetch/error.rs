//! Error types for per-tile fetching.

use thiserror::Error;

/// Per-tile failure during fetch, decode or resize.
///
/// These errors are recovered locally: the fetch stage logs them and
/// substitutes the placeholder tile. They never abort a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body was not a decodable image.
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// The per-fetch deadline elapsed.
    #[error("Fetch timed out after {secs}s")]
    Timeout { secs: u64 },
}
