//! Error types for source listing.

use std::fmt;

/// Failure to obtain the source image list.
///
/// Unlike per-tile fetch failures, a source listing failure is fatal for
/// the whole request: there is nothing to compose without a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The directory document could not be fetched.
    Fetch(String),
    /// The directory document could not be interpreted.
    Malformed(String),
    /// The document parsed but contained no image references.
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Fetch(msg) => write!(f, "Failed to fetch source list: {}", msg),
            SourceError::Malformed(msg) => write!(f, "Malformed source list: {}", msg),
            SourceError::Empty => write!(f, "Source list contains no image references"),
        }
    }
}

impl std::error::Error for SourceError {}
