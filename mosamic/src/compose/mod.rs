//! Grid assembly and final rendering.
//!
//! [`MosaicComposer`] takes a tile sequence and a layout plan, assembles
//! the spaced grid raster, fits it onto the output canvas, and encodes
//! the result as PNG. Slots beyond the tile sequence (padding cells) are
//! rendered as placeholder tiles, so the grid is always completely
//! filled.

mod error;

pub use error::CompositionError;

use std::io::Cursor;

use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::config::MosaicConfig;
use crate::layout::LayoutPlan;
use crate::tile::Tile;

/// Renders a tile sequence into the final PNG canvas.
pub struct MosaicComposer {
    config: MosaicConfig,
}

impl MosaicComposer {
    /// Creates a composer for the given output settings.
    pub fn new(config: MosaicConfig) -> Self {
        Self { config }
    }

    /// Pixel dimensions of the raw (pre-fit) grid raster for `plan`.
    ///
    /// Each cell occupies `tile + spacing`, with one extra spacing run
    /// along the leading edges so every tile is surrounded evenly.
    ///
    /// Computed in `u64`: a request with extreme forced padding or tile
    /// sizes can plan a grid whose pixel dimensions exceed `u32`, and
    /// that must surface as [`CompositionError::GridTooLarge`], not
    /// wrap-around.
    pub fn grid_size(&self, plan: &LayoutPlan) -> Result<(u32, u32), CompositionError> {
        let spacing = self.config.spacing as u64;
        let cell_w = self.config.tile_width as u64 + spacing;
        let cell_h = self.config.tile_height as u64 + spacing;
        let width = plan.columns as u64 * cell_w + spacing;
        let height = plan.rows as u64 * cell_h + spacing;

        if width > u32::MAX as u64 || height > u32::MAX as u64 {
            return Err(CompositionError::GridTooLarge { width, height });
        }
        Ok((width as u32, height as u32))
    }

    /// Composes `tiles` into the grid described by `plan` and returns the
    /// encoded PNG.
    ///
    /// `tiles` may be shorter than the grid; the remaining cells are
    /// filled with placeholders. It must not be longer.
    pub fn compose(&self, tiles: &[Tile], plan: &LayoutPlan) -> Result<Vec<u8>, CompositionError> {
        let cells = plan.total_cells();
        if tiles.len() > cells {
            return Err(CompositionError::GridMismatch {
                tiles: tiles.len(),
                cells,
            });
        }

        let (grid_w, grid_h) = self.grid_size(plan)?;
        let grid = self.render_grid(tiles, plan, grid_w, grid_h);
        let canvas = self.fit_to_canvas(grid);
        encode_png(&canvas)
    }

    fn render_grid(&self, tiles: &[Tile], plan: &LayoutPlan, grid_w: u32, grid_h: u32) -> RgbaImage {
        let background: Rgba<u8> = self.config.background.into();
        let mut grid = RgbaImage::from_pixel(grid_w, grid_h, background);

        debug!(
            columns = plan.columns,
            rows = plan.rows,
            width = grid_w,
            height = grid_h,
            "rendering grid"
        );

        let padding = Tile::placeholder(self.config.tile_width, self.config.tile_height);
        let cell_w = (self.config.tile_width + self.config.spacing) as i64;
        let cell_h = (self.config.tile_height + self.config.spacing) as i64;
        let inset = self.config.spacing as i64;

        for index in 0..plan.total_cells() {
            let tile = tiles.get(index).unwrap_or(&padding);
            let column = (index % plan.columns as usize) as i64;
            let row = (index / plan.columns as usize) as i64;
            imageops::overlay(
                &mut grid,
                tile.image(),
                column * cell_w + inset,
                row * cell_h + inset,
            );
        }

        grid
    }

    /// Fits the grid onto the output canvas: scale to the largest size
    /// that fits entirely (aspect preserved), centered over the
    /// background color.
    fn fit_to_canvas(&self, grid: RgbaImage) -> RgbaImage {
        let canvas_w = self.config.canvas_width;
        let canvas_h = self.config.canvas_height;
        let background: Rgba<u8> = self.config.background.into();

        let fitted = DynamicImage::ImageRgba8(grid)
            .resize(canvas_w, canvas_h, imageops::FilterType::Lanczos3)
            .into_rgba8();

        let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, background);
        let x = (canvas_w.saturating_sub(fitted.width()) / 2) as i64;
        let y = (canvas_h.saturating_sub(fitted.height()) / 2) as i64;
        imageops::overlay(&mut canvas, &fitted, x, y);
        canvas
    }
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, CompositionError> {
    let mut out = Cursor::new(Vec::new());
    canvas
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CompositionError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}
