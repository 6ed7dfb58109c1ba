//! End-to-end mosaic generation.
//!
//! [`MosaicPipeline`] wires the stages together: list references from the
//! source, fetch and normalize tiles, optionally shuffle, plan the grid,
//! compose, encode. It is generic over the source and the HTTP client so
//! the whole flow runs against in-memory doubles in tests.

mod error;

pub use error::MosaicError;

use tracing::info;

use crate::compose::MosaicComposer;
use crate::config::MosaicConfig;
use crate::fetch::{AsyncHttpClient, ProgressCallback, TileFetcher};
use crate::layout::plan_layout;
use crate::shuffle::shuffle_tiles;
use crate::source::ImageSource;

/// Runs the full source → tiles → grid → PNG flow.
pub struct MosaicPipeline<S: ImageSource, C: AsyncHttpClient> {
    config: MosaicConfig,
    source: S,
    fetcher: TileFetcher<C>,
}

impl<S: ImageSource, C: AsyncHttpClient> MosaicPipeline<S, C> {
    /// Creates a pipeline over the given source and tile HTTP client.
    pub fn new(config: MosaicConfig, source: S, client: C) -> Self {
        Self {
            config,
            source,
            fetcher: TileFetcher::new(client),
        }
    }

    /// Attaches a progress callback for the fetch stage.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.fetcher = self.fetcher.with_progress(callback);
        self
    }

    /// Sets the per-download deadline for the fetch stage.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.fetcher = self.fetcher.with_timeout(timeout);
        self
    }

    /// Generates one mosaic and returns the encoded PNG.
    pub async fn generate(&self) -> Result<Vec<u8>, MosaicError> {
        self.config.validate()?;

        // Simulate mode with an explicit cap never needs the source list:
        // the slot count is already known.
        let references = if self.config.simulate && self.config.max_images > 0 {
            Vec::new()
        } else {
            self.source.list().await?
        };

        let mut tiles = self.fetcher.fetch_tiles(&self.config, &references).await;
        if self.config.randomize {
            shuffle_tiles(&mut tiles);
        }

        let plan = plan_layout(&self.config, tiles.len())?;
        info!(
            tiles = tiles.len(),
            columns = plan.columns,
            rows = plan.rows,
            padding = plan.padding,
            "composing mosaic"
        );

        let composer = MosaicComposer::new(self.config.clone());
        let png = composer.compose(&tiles, &plan)?;
        Ok(png)
    }
}
