//! Mosamic - photo mosaic generation from remote image directories.
//!
//! This library turns a directory of portrait URLs into a single composite
//! image: it lists the directory, downloads every portrait concurrently,
//! normalizes each into a fixed-size tile (substituting a placeholder for
//! any that fail), plans a near-square grid that balances tile area against
//! the output canvas, and renders the spaced grid as a PNG.
//!
//! # High-Level API
//!
//! [`pipeline::MosaicPipeline`] runs the whole flow:
//!
//! ```ignore
//! use mosamic::config::MosaicConfig;
//! use mosamic::fetch::AsyncReqwestClient;
//! use mosamic::pipeline::MosaicPipeline;
//! use mosamic::source::HtmlDirectorySource;
//!
//! let client = AsyncReqwestClient::new()?;
//! let source = HtmlDirectorySource::new(client.clone(), "https://example.com/team", "img-profile");
//! let config = MosaicConfig::default();
//!
//! let png = MosaicPipeline::new(config, source, client).generate().await?;
//! std::fs::write("mosaic.png", png)?;
//! ```
//!
//! The stages are also usable individually; each lives in its own module
//! behind a small seam ([`source::ImageSource`], [`fetch::AsyncHttpClient`])
//! so callers can substitute their own directory formats or transports.

pub mod compose;
pub mod config;
pub mod fetch;
pub mod layout;
pub mod logging;
pub mod pipeline;
#[cfg(feature = "service")]
pub mod service;
pub mod shuffle;
pub mod source;
pub mod tile;

/// Version of the mosamic library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
