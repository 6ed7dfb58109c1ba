//! Cover resize and anchored crop for source images.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::config::Anchor;

/// Normalizes a decoded image to exactly `width` × `height`.
///
/// Scales the image preserving aspect ratio until it covers the target in
/// both dimensions, then crops the overflow at the given anchor. The
/// result always has the exact target dimensions.
pub fn cover_resize(image: &DynamicImage, width: u32, height: u32, anchor: Anchor) -> RgbaImage {
    let src_w = image.width().max(1) as f64;
    let src_h = image.height().max(1) as f64;

    let scale = (width as f64 / src_w).max(height as f64 / src_h);
    // Round up so the scaled image always covers the target.
    let scaled_w = ((src_w * scale).ceil() as u32).max(width);
    let scaled_h = ((src_h * scale).ceil() as u32).max(height);

    let resized = image.resize_exact(scaled_w, scaled_h, FilterType::Lanczos3);

    let overflow_x = scaled_w - width;
    let overflow_y = scaled_h - height;
    let (x, y) = match anchor {
        Anchor::Top => (overflow_x / 2, 0),
        Anchor::Bottom => (overflow_x / 2, overflow_y),
        Anchor::Left => (0, overflow_y / 2),
        Anchor::Right => (overflow_x, overflow_y / 2),
        Anchor::Center => (overflow_x / 2, overflow_y / 2),
    };

    resized.crop_imm(x, y, width, height).to_rgba8()
}
