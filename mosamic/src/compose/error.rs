//! Error types for mosaic composition.

use std::fmt;

/// Failure during grid assembly or output encoding.
#[derive(Debug)]
pub enum CompositionError {
    /// The tile sequence does not fill the planned grid and cannot be
    /// padded to it.
    GridMismatch {
        tiles: usize,
        cells: usize,
    },
    /// The planned grid's pixel dimensions exceed what a raster can hold.
    GridTooLarge {
        width: u64,
        height: u64,
    },
    /// The final raster could not be encoded as PNG.
    Encode(String),
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::GridMismatch { tiles, cells } => write!(
                f,
                "Tile count {} exceeds planned grid capacity {}",
                tiles, cells
            ),
            CompositionError::GridTooLarge { width, height } => write!(
                f,
                "Planned grid of {}×{} pixels is too large to render",
                width, height
            ),
            CompositionError::Encode(msg) => write!(f, "Failed to encode PNG output: {}", msg),
        }
    }
}

impl std::error::Error for CompositionError {}
