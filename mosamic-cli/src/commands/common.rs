//! Common types and utilities shared across CLI commands.

use std::collections::HashMap;

use clap::{Args, ValueEnum};
use mosamic::config::MosaicConfig;
use mosamic::service::DirectoryKind;

use crate::error::CliError;

/// Image directory format selection for CLI arguments.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum SourceKind {
    /// Scrape portrait URLs from an HTML page (background-image styles)
    Html,
    /// Read an array of portrait URLs from a JSON document
    Json,
}

/// Where the portrait list comes from.
#[derive(Debug, Args)]
pub struct SourceOptions {
    /// URL of the image directory document
    #[arg(long, default_value = "https://rocket.chat/team")]
    pub source_url: String,

    /// How to interpret the directory document
    #[arg(long, value_enum, default_value = "html")]
    pub source_kind: SourceKind,

    /// CSS class marking portrait elements (html sources)
    #[arg(long, default_value = "img-profile")]
    pub marker_class: String,

    /// JSON pointer to the URL array (json sources), e.g. /data/avatars
    #[arg(long, default_value = "")]
    pub pointer: String,
}

impl SourceOptions {
    /// Convert to the service-layer directory description.
    pub fn to_directory_kind(&self) -> DirectoryKind {
        match self.source_kind {
            SourceKind::Html => DirectoryKind::Html {
                marker_class: self.marker_class.clone(),
            },
            SourceKind::Json => DirectoryKind::Json {
                pointer: self.pointer.clone(),
            },
        }
    }
}

/// Output and tile settings, mirroring the HTTP endpoint's query keys.
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output canvas width in pixels
    #[arg(long)]
    pub canvas_width: Option<u32>,

    /// Output canvas height in pixels
    #[arg(long)]
    pub canvas_height: Option<u32>,

    /// Gap between tiles in pixels
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Background color: "transparent" or hex like #1a2b3c
    #[arg(long)]
    pub background: Option<String>,

    /// Tile width in pixels
    #[arg(long)]
    pub tile_width: Option<u32>,

    /// Tile height in pixels
    #[arg(long)]
    pub tile_height: Option<u32>,

    /// Crop anchor when normalizing portraits: top, bottom, left, right or center
    #[arg(long)]
    pub position: Option<String>,

    /// Cap on the number of portraits used (0 = no cap)
    #[arg(long)]
    pub max_images: Option<u32>,

    /// Extra grid cells beyond the portrait count (-1 = automatic)
    #[arg(long)]
    pub extra_images: Option<i64>,

    /// Shuffle tile order before composing
    #[arg(long)]
    pub random: bool,

    /// Render placeholder tiles only, without any downloads
    #[arg(long)]
    pub simulate: bool,
}

impl OutputOptions {
    /// Build the mosaic configuration, reporting the offending flag on
    /// invalid input.
    pub fn to_config(&self) -> Result<MosaicConfig, CliError> {
        let mut params = HashMap::new();
        let mut set = |key: &str, value: Option<String>| {
            if let Some(v) = value {
                params.insert(key.to_string(), v);
            }
        };

        set("canvasWidth", self.canvas_width.map(|v| v.to_string()));
        set("canvasHeight", self.canvas_height.map(|v| v.to_string()));
        set("spacing", self.spacing.map(|v| v.to_string()));
        set("background", self.background.clone());
        set("width", self.tile_width.map(|v| v.to_string()));
        set("height", self.tile_height.map(|v| v.to_string()));
        set("position", self.position.clone());
        set("maxImages", self.max_images.map(|v| v.to_string()));
        set("extraImages", self.extra_images.map(|v| v.to_string()));
        set("random", Some(self.random.to_string()));
        set("simulate", Some(self.simulate.to_string()));

        MosaicConfig::from_params(&params).map_err(|e| CliError::Config(e.to_string()))
    }
}
