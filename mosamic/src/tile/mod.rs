//! Normalized mosaic tiles.
//!
//! A [`Tile`] is a raster of exactly the configured tile dimensions, tagged
//! as either `Real` (decoded from a source photo) or `Placeholder` (filler
//! for failed fetches and grid padding). The type deliberately has no empty
//! state: every slot the compositor sees holds a full-size raster, so a
//! failed fetch can never leak a malformed slot downstream.

use image::{Rgba, RgbaImage};

/// Placeholder fill color, a neutral grey that reads as "missing" without
/// shouting in the final composite.
const PLACEHOLDER_FILL: Rgba<u8> = Rgba([203, 203, 203, 255]);

/// Whether a tile came from a source photo or is filler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    /// Decoded and normalized from a fetched source image.
    Real,
    /// Substituted for a failed fetch, or grid padding.
    Placeholder,
}

/// A fixed-size normalized image fragment.
#[derive(Clone, Debug)]
pub struct Tile {
    image: RgbaImage,
    kind: TileKind,
}

impl Tile {
    /// Wraps a normalized raster as a real tile.
    ///
    /// The caller guarantees the raster already has the configured tile
    /// dimensions; the fetch stage's cover resize is the only producer.
    pub fn real(image: RgbaImage) -> Self {
        Self {
            image,
            kind: TileKind::Real,
        }
    }

    /// Creates a placeholder tile of the given dimensions.
    ///
    /// Deterministic: two placeholders of the same size are pixel-identical,
    /// which keeps simulate-mode output reproducible.
    pub fn placeholder(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, PLACEHOLDER_FILL),
            kind: TileKind::Placeholder,
        }
    }

    /// The tile raster.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Whether this tile is real or placeholder.
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// True for placeholder tiles.
    pub fn is_placeholder(&self) -> bool {
        self.kind == TileKind::Placeholder
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_requested_dimensions() {
        let tile = Tile::placeholder(200, 150);
        assert_eq!(tile.width(), 200);
        assert_eq!(tile.height(), 150);
        assert_eq!(tile.kind(), TileKind::Placeholder);
        assert!(tile.is_placeholder());
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let a = Tile::placeholder(64, 64);
        let b = Tile::placeholder(64, 64);
        assert_eq!(a.image().as_raw(), b.image().as_raw());
    }

    #[test]
    fn test_real_tile_keeps_raster() {
        let raster = RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 255]));
        let tile = Tile::real(raster.clone());
        assert_eq!(tile.kind(), TileKind::Real);
        assert!(!tile.is_placeholder());
        assert_eq!(tile.image().as_raw(), raster.as_raw());
    }
}
