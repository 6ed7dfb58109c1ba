//! Top-level pipeline error.

use std::fmt;

use crate::compose::CompositionError;
use crate::config::ConfigError;
use crate::layout::LayoutError;
use crate::source::SourceError;

/// Any failure that aborts a mosaic request.
///
/// Per-tile fetch failures never surface here; they degrade to
/// placeholder tiles inside the fetch stage.
#[derive(Debug)]
pub enum MosaicError {
    /// Invalid output or tile settings.
    Config(ConfigError),
    /// The source image list could not be obtained.
    Source(SourceError),
    /// No grid fits the requested canvas.
    Layout(LayoutError),
    /// Grid assembly or PNG encoding failed.
    Composition(CompositionError),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::Config(e) => write!(f, "Configuration error: {}", e),
            MosaicError::Source(e) => write!(f, "Source listing error: {}", e),
            MosaicError::Layout(e) => write!(f, "Layout error: {}", e),
            MosaicError::Composition(e) => write!(f, "Composition error: {}", e),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Config(e) => Some(e),
            MosaicError::Source(e) => Some(e),
            MosaicError::Layout(e) => Some(e),
            MosaicError::Composition(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MosaicError {
    fn from(e: ConfigError) -> Self {
        MosaicError::Config(e)
    }
}

impl From<SourceError> for MosaicError {
    fn from(e: SourceError) -> Self {
        MosaicError::Source(e)
    }
}

impl From<LayoutError> for MosaicError {
    fn from(e: LayoutError) -> Self {
        MosaicError::Layout(e)
    }
}

impl From<CompositionError> for MosaicError {
    fn from(e: CompositionError) -> Self {
        MosaicError::Composition(e)
    }
}
