//! Grid layout planning.
//!
//! Converts an arbitrary tile count and the configured canvas/tile
//! dimensions into a near-optimal columns × rows grid via an
//! area-balancing heuristic: instead of fixing the tile pixel size against
//! the canvas, the planner solves for a column count such that scaled
//! tiles approximately preserve their aspect ratio while sharing the
//! canvas area proportionally to the tile count. This avoids degenerate
//! 1×N or N×1 grids at extreme counts.

mod error;

pub use error::LayoutError;

use tracing::debug;

use crate::config::{ExtraImages, MosaicConfig};

/// A planned grid: column/row counts plus trailing placeholder cells.
///
/// Invariants: `columns >= 1`, `rows >= 1`,
/// `columns * rows >= tile_count + padding`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Trailing cells to fill with placeholder tiles.
    pub padding: u32,
}

impl LayoutPlan {
    /// Total number of grid cells.
    pub fn total_cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Plans the grid for `tile_count` real tiles under the given config.
///
/// # Errors
///
/// - [`LayoutError::NoTiles`] when there is nothing to lay out
///   (`tile_count == 0` and no forced padding) — the area split would
///   otherwise divide by zero.
/// - [`LayoutError::CanvasTooSmall`] when the canvas cannot hold even a
///   single scaled tile.
pub fn plan_layout(config: &MosaicConfig, tile_count: usize) -> Result<LayoutPlan, LayoutError> {
    let forced_extra = match config.extra_images {
        ExtraImages::Forced(n) => Some(n),
        ExtraImages::Auto => None,
    };

    let effective_count = tile_count + forced_extra.unwrap_or(0) as usize;
    if effective_count == 0 {
        return Err(LayoutError::NoTiles);
    }

    let canvas_area = config.canvas_width as f64 * config.canvas_height as f64;
    let nominal_tile_area = config.tile_width as f64 * config.tile_height as f64;

    // Area each tile may claim on the canvas, then the linear factor by
    // which a nominal tile must shrink (or grow) to claim exactly that.
    let per_tile_area = (canvas_area / effective_count as f64).floor();
    if per_tile_area < 1.0 {
        // More tiles than canvas pixels; no scaled tile can fit.
        return Err(LayoutError::CanvasTooSmall {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            tile_count: effective_count,
        });
    }
    let scale_factor = (nominal_tile_area / per_tile_area).sqrt();
    let scaled_tile_width = config.tile_width as f64 / scale_factor;

    let columns = (config.canvas_width as f64 / scaled_tile_width).floor() as u32;
    if columns == 0 {
        return Err(LayoutError::CanvasTooSmall {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            tile_count: effective_count,
        });
    }

    let rows = effective_count.div_ceil(columns as usize) as u32;

    let padding = match forced_extra {
        Some(n) => n,
        None => {
            let remainder = (effective_count % columns as usize) as u32;
            if remainder == 0 {
                0
            } else {
                columns - remainder
            }
        }
    };

    let plan = LayoutPlan {
        columns,
        rows,
        padding,
    };
    debug!(
        tile_count,
        columns = plan.columns,
        rows = plan.rows,
        padding = plan.padding,
        "planned mosaic grid"
    );

    debug_assert!(plan.total_cells() >= tile_count + padding as usize);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraImages;
    use proptest::prelude::*;

    fn config(cw: u32, ch: u32, tw: u32, th: u32) -> MosaicConfig {
        MosaicConfig::new(cw, ch, tw, th).unwrap()
    }

    #[test]
    fn test_reference_layout_twenty_tiles() {
        // 1440×810 canvas, 200×200 tiles, 20 tiles, auto padding.
        let plan = plan_layout(&config(1440, 810, 200, 200), 20).unwrap();
        assert_eq!(plan, LayoutPlan { columns: 5, rows: 4, padding: 0 });
    }

    #[test]
    fn test_reference_layout_twelve_tiles() {
        let plan = plan_layout(&config(1440, 810, 200, 200), 12).unwrap();
        assert_eq!(plan, LayoutPlan { columns: 4, rows: 3, padding: 0 });
    }

    #[test]
    fn test_auto_padding_fills_last_row() {
        let plan = plan_layout(&config(1440, 810, 200, 200), 18).unwrap();
        assert_eq!(plan.columns, 5);
        assert_eq!(plan.rows, 4);
        assert_eq!(plan.padding, 2);
        assert_eq!(plan.total_cells(), 18 + plan.padding as usize);
    }

    #[test]
    fn test_auto_padding_normalized_to_zero_on_exact_fit() {
        // effective % columns == 0 must not add a spurious full row.
        let plan = plan_layout(&config(1440, 810, 200, 200), 20).unwrap();
        assert_eq!(plan.padding, 0);
    }

    #[test]
    fn test_zero_tiles_is_layout_error() {
        let err = plan_layout(&config(1440, 810, 200, 200), 0).unwrap_err();
        assert!(matches!(err, LayoutError::NoTiles));
    }

    #[test]
    fn test_forced_extra_makes_zero_tiles_plannable() {
        let cfg = config(1440, 810, 200, 200).with_extra_images(ExtraImages::Forced(4));
        let plan = plan_layout(&cfg, 0).unwrap();
        assert_eq!(plan.padding, 4);
        assert!(plan.total_cells() >= 4);
    }

    #[test]
    fn test_forced_extra_is_exact() {
        let cfg = config(1440, 810, 200, 200).with_extra_images(ExtraImages::Forced(7));
        let plan = plan_layout(&cfg, 10).unwrap();
        assert_eq!(plan.padding, 7);
        assert!(plan.total_cells() >= 17);
    }

    #[test]
    fn test_forced_extra_much_larger_than_count() {
        // Forced padding dominates the grid; the formula output is accepted
        // as-is and the cell invariant still holds.
        let cfg = config(1440, 810, 200, 200).with_extra_images(ExtraImages::Forced(100));
        let plan = plan_layout(&cfg, 3).unwrap();
        assert_eq!(plan.padding, 100);
        assert!(plan.total_cells() >= 103);
    }

    #[test]
    fn test_more_tiles_than_canvas_pixels_fails() {
        let err = plan_layout(&config(4, 4, 200, 200), 1000).unwrap_err();
        assert!(matches!(err, LayoutError::CanvasTooSmall { .. }));
    }

    #[test]
    fn test_single_tile() {
        let plan = plan_layout(&config(1440, 810, 200, 200), 1).unwrap();
        assert!(plan.columns >= 1);
        assert!(plan.rows >= 1);
        assert!(plan.total_cells() >= 1);
    }

    #[test]
    fn test_wide_tiles_still_balance() {
        // Non-square tiles: 320×180 tiles on a 1280×720 canvas.
        let plan = plan_layout(&config(1280, 720, 320, 180), 16).unwrap();
        assert!(plan.columns >= 2, "wide tiles must not collapse to one column");
        assert!(plan.total_cells() >= 16);
    }

    proptest! {
        #[test]
        fn prop_plan_invariants(
            tile_count in 1usize..500,
            canvas_width in 200u32..4000,
            canvas_height in 200u32..4000,
            tile_size in 50u32..500,
        ) {
            let cfg = config(canvas_width, canvas_height, tile_size, tile_size);
            if let Ok(plan) = plan_layout(&cfg, tile_count) {
                prop_assert!(plan.columns >= 1);
                prop_assert!(plan.rows >= 1);
                prop_assert!(plan.total_cells() >= tile_count);
                prop_assert!(plan.total_cells() >= tile_count + plan.padding as usize);
            }
        }

        #[test]
        fn prop_auto_padding_bounded_by_columns(
            tile_count in 1usize..500,
        ) {
            let cfg = config(1440, 810, 200, 200);
            let plan = plan_layout(&cfg, tile_count).unwrap();
            prop_assert!(plan.padding < plan.columns);
            prop_assert_eq!(
                plan.total_cells(),
                tile_count + plan.padding as usize,
                "auto padding fills exactly the remainder of the last row"
            );
        }
    }
}
