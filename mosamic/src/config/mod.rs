//! Mosaic configuration.
//!
//! This module defines [`MosaicConfig`], the single immutable value that
//! drives a mosaic request. A config is constructed once — either
//! programmatically via [`MosaicConfig::new`] and the `with_*` setters, or
//! from untyped string parameters via [`MosaicConfig::from_params`] — and
//! then passed by reference through every pipeline stage. It is never
//! mutated after construction.
//!
//! All numeric parameters are validated at construction time; an invalid
//! value produces a [`ConfigError`] naming the offending key rather than a
//! silent default.

mod color;
mod error;

pub use color::{parse_background, Color};
pub use error::ConfigError;

use std::collections::HashMap;

/// Anchor used when cropping a source image to tile size.
///
/// A cover resize scales an image until it fills the tile in both
/// dimensions, then crops the overflow. The anchor decides which part
/// of the image survives the crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Keep the top edge (portrait photos keep faces).
    #[default]
    Top,
    /// Keep the bottom edge.
    Bottom,
    /// Keep the left edge.
    Left,
    /// Keep the right edge.
    Right,
    /// Keep the middle of the image.
    Center,
}

impl Anchor {
    /// Parses an anchor from its lowercase name.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Ok(Anchor::Top),
            "bottom" => Ok(Anchor::Bottom),
            "left" => Ok(Anchor::Left),
            "right" => Ok(Anchor::Right),
            "center" | "centre" => Ok(Anchor::Center),
            other => Err(ConfigError::invalid_value(
                "position",
                other,
                "expected one of: top, bottom, left, right, center",
            )),
        }
    }
}

/// Padding policy for the trailing cells of the grid.
///
/// The distinction is explicit at the type level so that "auto" can never
/// be confused with "force zero padding".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtraImages {
    /// Fill only the remainder of the last row with placeholder tiles.
    #[default]
    Auto,
    /// Reserve exactly this many deliberately blank trailing cells.
    Forced(u32),
}

/// Immutable configuration for one mosaic request.
#[derive(Clone, Debug)]
pub struct MosaicConfig {
    /// Final output width in pixels. Always > 0.
    pub canvas_width: u32,
    /// Final output height in pixels. Always > 0.
    pub canvas_height: u32,
    /// Gap between tiles and around the grid border, in pixels.
    pub spacing: u32,
    /// Canvas fill color. May be fully transparent.
    pub background: Color,
    /// Normalized tile width in pixels. Always > 0.
    pub tile_width: u32,
    /// Normalized tile height in pixels. Always > 0.
    pub tile_height: u32,
    /// Crop anchor for the cover resize of source images.
    pub anchor: Anchor,
    /// Truncation cap on the source list. 0 means unlimited.
    pub max_images: usize,
    /// Padding policy for trailing grid cells.
    pub extra_images: ExtraImages,
    /// Shuffle tiles before placement.
    pub randomize: bool,
    /// Skip all network access and fill every slot with the placeholder.
    pub simulate: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1440,
            canvas_height: 810,
            spacing: 4,
            background: Color::TRANSPARENT,
            tile_width: 200,
            tile_height: 200,
            anchor: Anchor::Top,
            max_images: 0,
            extra_images: ExtraImages::Auto,
            randomize: false,
            simulate: false,
        }
    }
}

impl MosaicConfig {
    /// Creates a config with the given canvas and tile dimensions.
    ///
    /// Remaining fields take their defaults and can be adjusted through
    /// the `with_*` setters before first use.
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            canvas_width,
            canvas_height,
            tile_width,
            tile_height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the spacing between tiles.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the canvas background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the crop anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Cap the number of source images fetched. 0 means unlimited.
    pub fn with_max_images(mut self, max_images: usize) -> Self {
        self.max_images = max_images;
        self
    }

    /// Set the padding policy.
    pub fn with_extra_images(mut self, extra_images: ExtraImages) -> Self {
        self.extra_images = extra_images;
        self
    }

    /// Shuffle tiles before placement.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Skip the network and fill every slot with the placeholder tile.
    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    /// Builds a config from untyped string parameters.
    ///
    /// This is the boundary constructor for query parameters and similar
    /// key/value input. Recognized keys are `canvasWidth`, `canvasHeight`,
    /// `spacing`, `background`, `width`, `height`, `position`, `maxImages`,
    /// `extraImages`, `random` and `simulate`. Absent keys take their
    /// defaults; present keys must parse, and a failure names the key.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = params.get("canvasWidth") {
            config.canvas_width = parse_u32("canvasWidth", v)?;
        }
        if let Some(v) = params.get("canvasHeight") {
            config.canvas_height = parse_u32("canvasHeight", v)?;
        }
        if let Some(v) = params.get("spacing") {
            config.spacing = parse_u32("spacing", v)?;
        }
        if let Some(v) = params.get("background") {
            config.background = parse_background(v)?;
        }
        if let Some(v) = params.get("width") {
            config.tile_width = parse_u32("width", v)?;
        }
        if let Some(v) = params.get("height") {
            config.tile_height = parse_u32("height", v)?;
        }
        if let Some(v) = params.get("position") {
            config.anchor = Anchor::parse(v)?;
        }
        if let Some(v) = params.get("maxImages") {
            config.max_images = parse_u32("maxImages", v)? as usize;
        }
        if let Some(v) = params.get("extraImages") {
            config.extra_images = parse_extra_images(v)?;
        }
        if let Some(v) = params.get("random") {
            config.randomize = parse_bool("random", v)?;
        }
        if let Some(v) = params.get("simulate") {
            config.simulate = parse_bool("simulate", v)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the dimensional invariants that all later stages rely on.
    ///
    /// Both constructors run this; it is public because the `with_*`
    /// setters do not re-check, so callers assembling a config by hand
    /// can validate once at the end.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 {
            return Err(ConfigError::out_of_range("canvasWidth", "must be > 0"));
        }
        if self.canvas_height == 0 {
            return Err(ConfigError::out_of_range("canvasHeight", "must be > 0"));
        }
        if self.tile_width == 0 {
            return Err(ConfigError::out_of_range("width", "must be > 0"));
        }
        if self.tile_height == 0 {
            return Err(ConfigError::out_of_range("height", "must be > 0"));
        }
        Ok(())
    }
}

fn parse_u32(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::invalid_number(key, value))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::invalid_value(
            key,
            value,
            "expected a boolean (true/false/1/0)",
        )),
    }
}

fn parse_extra_images(value: &str) -> Result<ExtraImages, ConfigError> {
    let parsed = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::invalid_number("extraImages", value))?;
    match parsed {
        -1 => Ok(ExtraImages::Auto),
        n if n >= 0 && n <= u32::MAX as i64 => Ok(ExtraImages::Forced(n as u32)),
        _ => Err(ConfigError::out_of_range(
            "extraImages",
            "must be -1 (auto) or >= 0",
        )),
    }
}
