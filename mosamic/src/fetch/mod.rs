//! Concurrent, failure-tolerant tile fetching.
//!
//! [`TileFetcher`] turns a list of image references into normalized tiles.
//! All fetches in a batch run concurrently, each under its own deadline.
//! A per-item failure of any kind — network error, non-success status,
//! undecodable body, timeout — resolves that slot to the placeholder tile;
//! the batch itself never aborts, and the returned sequence always has one
//! full-size tile per (truncated) input reference, in input order.

mod error;
mod http;
mod normalize;
mod progress;

pub use error::FetchError;
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use normalize::cover_resize;
pub use progress::{FetchProgress, ProgressCallback};

#[cfg(test)]
pub use http::tests::{MockHttpClient, RoutedMockClient};

use std::time::Duration;

use tracing::{info, warn};

use crate::config::MosaicConfig;
use crate::source::ImageReference;
use crate::tile::Tile;

/// Default deadline for a single fetch + decode + resize.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Fetches and normalizes source images into tiles.
pub struct TileFetcher<C: AsyncHttpClient> {
    client: C,
    fetch_timeout: Duration,
    progress: Option<ProgressCallback>,
}

impl<C: AsyncHttpClient> TileFetcher<C> {
    /// Creates a fetcher over the given HTTP client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            progress: None,
        }
    }

    /// Sets the per-fetch deadline. A fetch that exceeds it resolves to
    /// the placeholder tile like any other failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Attaches a progress callback, invoked once per resolved tile.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Fetches one tile per reference.
    ///
    /// Truncates the reference list to `config.max_images` when that cap
    /// is set. In simulate mode no network access happens at all; every
    /// slot is the placeholder tile, and the slot count is `max_images`
    /// when set, otherwise the reference count.
    pub async fn fetch_tiles(&self, config: &MosaicConfig, refs: &[ImageReference]) -> Vec<Tile> {
        if config.simulate {
            let count = if config.max_images > 0 {
                config.max_images
            } else {
                refs.len()
            };
            info!(count, "simulate mode: filling every slot with the placeholder tile");
            let progress = FetchProgress::new(count, self.progress.clone());
            return (0..count)
                .map(|_| {
                    let tile = Tile::placeholder(config.tile_width, config.tile_height);
                    progress.tick();
                    tile
                })
                .collect();
        }

        let refs = if config.max_images > 0 && refs.len() > config.max_images {
            &refs[..config.max_images]
        } else {
            refs
        };

        let total = refs.len();
        info!(total, "fetching tiles");
        let progress = FetchProgress::new(total, self.progress.clone());

        let tasks = refs.iter().map(|reference| {
            let progress = progress.clone();
            async move {
                let tile = match self.fetch_one(config, reference).await {
                    Ok(tile) => Tile::real(tile),
                    Err(e) => {
                        warn!(url = %reference, error = %e, "tile fetch failed, substituting placeholder");
                        Tile::placeholder(config.tile_width, config.tile_height)
                    }
                };
                progress.tick();
                tile
            }
        });

        let tiles = futures::future::join_all(tasks).await;
        let failed = tiles.iter().filter(|t| t.is_placeholder()).count();
        info!(total, failed, "fetch stage complete");
        tiles
    }

    /// Fetch → decode → cover-resize one reference.
    async fn fetch_one(
        &self,
        config: &MosaicConfig,
        reference: &ImageReference,
    ) -> Result<image::RgbaImage, FetchError> {
        let bytes = tokio::time::timeout(self.fetch_timeout, self.client.get(reference.url()))
            .await
            .map_err(|_| FetchError::Timeout {
                secs: self.fetch_timeout.as_secs(),
            })??;

        let decoded =
            image::load_from_memory(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(cover_resize(
            &decoded,
            config.tile_width,
            config.tile_height,
            config.anchor,
        ))
    }
}
