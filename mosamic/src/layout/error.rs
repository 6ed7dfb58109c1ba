//! Error types for layout planning.

use std::fmt;

/// Errors produced by the layout planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No tiles and no forced padding: there is nothing to lay out, and
    /// the per-tile area split would divide by zero.
    NoTiles,
    /// The canvas cannot hold even a single scaled tile.
    CanvasTooSmall {
        canvas_width: u32,
        canvas_height: u32,
        tile_count: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoTiles => write!(f, "Cannot plan a layout for zero tiles"),
            LayoutError::CanvasTooSmall {
                canvas_width,
                canvas_height,
                tile_count,
            } => write!(
                f,
                "Canvas {}×{} is too small for a grid of {} tiles",
                canvas_width, canvas_height, tile_count
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
