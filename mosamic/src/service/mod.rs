//! HTTP endpoint for on-demand mosaic generation.
//!
//! Enabled with the `service` feature. Exposes `GET /api/mosaic`, which
//! reads the full output configuration from the query string, runs the
//! pipeline against the configured image directory, and answers with the
//! encoded PNG. Responses carry a short shared-cache lifetime so a CDN in
//! front can serve stale copies while revalidating.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::json;
use tracing::{error, info};

use crate::config::MosaicConfig;
use crate::fetch::AsyncReqwestClient;
use crate::pipeline::{MosaicError, MosaicPipeline};
use crate::source::{HtmlDirectorySource, JsonDirectorySource};

/// Cache directive for successful responses.
const CACHE_CONTROL: &str = "s-maxage=1, stale-while-revalidate";

/// How the configured directory document should be interpreted.
#[derive(Clone, Debug)]
pub enum DirectoryKind {
    /// Scrape `background-image` URLs from elements carrying this CSS class.
    Html { marker_class: String },
    /// Read an array of URL strings at this JSON pointer.
    Json { pointer: String },
}

/// Shared state for the mosaic endpoint.
pub struct ServiceState {
    url: String,
    kind: DirectoryKind,
    client: AsyncReqwestClient,
}

impl ServiceState {
    /// Creates service state for the given image directory.
    pub fn new(url: impl Into<String>, kind: DirectoryKind, client: AsyncReqwestClient) -> Self {
        Self {
            url: url.into(),
            kind,
            client,
        }
    }
}

/// Builds the router serving `GET /api/mosaic`.
pub fn router(state: Arc<ServiceState>) -> Router {
    Router::new()
        .route("/api/mosaic", get(mosaic_handler))
        .with_state(state)
}

async fn mosaic_handler(
    State(state): State<Arc<ServiceState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let config = match MosaicConfig::from_params(&params) {
        Ok(config) => config,
        Err(e) => {
            info!(error = %e, "rejecting request with invalid parameters");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let result = match &state.kind {
        DirectoryKind::Html { marker_class } => {
            let source =
                HtmlDirectorySource::new(state.client.clone(), &state.url, marker_class);
            MosaicPipeline::new(config, source, state.client.clone())
                .generate()
                .await
        }
        DirectoryKind::Json { pointer } => {
            let source = JsonDirectorySource::new(state.client.clone(), &state.url, pointer);
            MosaicPipeline::new(config, source, state.client.clone())
                .generate()
                .await
        }
    };

    match result {
        Ok(png) => {
            let headers = [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ];
            (StatusCode::OK, headers, Bytes::from(png)).into_response()
        }
        Err(e) => {
            error!(error = %e, "mosaic generation failed");
            let status = match e {
                MosaicError::Config(_) => StatusCode::BAD_REQUEST,
                MosaicError::Source(_) => StatusCode::BAD_GATEWAY,
                MosaicError::Layout(_) => StatusCode::BAD_REQUEST,
                MosaicError::Composition(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, &e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
