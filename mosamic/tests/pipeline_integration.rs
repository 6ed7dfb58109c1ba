//! Integration tests for the mosaic pipeline.
//!
//! These tests verify the complete flow including:
//! - source listing → fetch → layout → composition → PNG
//! - placeholder degradation when individual downloads fail
//! - simulate mode for layout prototyping without network access
//!
//! Run with: `cargo test --test pipeline_integration`

use std::collections::HashMap;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use mosamic::config::MosaicConfig;
use mosamic::fetch::{AsyncHttpClient, FetchError};
use mosamic::layout::plan_layout;
use mosamic::pipeline::{MosaicError, MosaicPipeline};
use mosamic::source::{HtmlDirectorySource, StaticSource};

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode a solid-color PNG of the given size.
fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// Client that answers every URL with the same body.
#[derive(Clone)]
struct FixedClient {
    response: Result<Vec<u8>, FetchError>,
}

impl AsyncHttpClient for FixedClient {
    async fn get(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        self.response.clone()
    }
}

/// Client that serves a red portrait for `/ok/` URLs and fails the rest.
#[derive(Clone)]
struct FlakyClient;

impl AsyncHttpClient for FlakyClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if url.contains("/ok/") {
            Ok(png_bytes(300, 400, [200, 40, 40, 255]))
        } else {
            Err(FetchError::Http(format!("HTTP 404 from {}", url)))
        }
    }
}

fn urls(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("http://photos.test/ok/{}.jpg", i))
        .collect()
}

// ============================================================================
// Integration Tests
// ============================================================================

/// Full flow over an in-memory source: every portrait downloads, the
/// output is a canvas-sized PNG.
#[tokio::test]
async fn full_flow_produces_canvas_sized_png() {
    let config = MosaicConfig::default();
    let source = StaticSource::new(urls(20));
    let client = FixedClient {
        response: Ok(png_bytes(300, 400, [200, 40, 40, 255])),
    };

    let png = MosaicPipeline::new(config, source, client)
        .generate()
        .await
        .unwrap();

    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 1440);
    assert_eq!(decoded.height(), 810);
}

/// Portrait downloads that fail degrade to placeholders; the request
/// still succeeds with the full grid.
#[tokio::test]
async fn failed_downloads_degrade_to_placeholders() {
    let config = MosaicConfig::default();
    let mut mixed = urls(10);
    mixed.extend((0..10).map(|i| format!("http://photos.test/missing/{}.jpg", i)));
    let source = StaticSource::new(mixed);

    let png = MosaicPipeline::new(config, source, FlakyClient)
        .generate()
        .await
        .unwrap();

    assert!(image::load_from_memory(&png).is_ok());
}

/// Simulate mode with a cap renders the grid without any network access.
#[tokio::test]
async fn simulate_mode_needs_no_network() {
    let config = MosaicConfig::default()
        .with_simulate(true)
        .with_max_images(12);
    // Both the source and the tile client would fail if touched.
    let source = StaticSource::new(Vec::<String>::new());
    let client = FixedClient {
        response: Err(FetchError::Http("no network in this test".into())),
    };

    let png = MosaicPipeline::new(config, source, client)
        .generate()
        .await
        .unwrap();

    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 1440);
    assert_eq!(decoded.height(), 810);
}

/// The reference layout: 20 portraits on the default canvas settle into
/// a 5x4 grid with no padding cells.
#[test]
fn reference_layout_five_by_four() {
    let plan = plan_layout(&MosaicConfig::default(), 20).unwrap();
    assert_eq!((plan.columns, plan.rows, plan.padding), (5, 4, 0));
}

/// Query-parameter construction drives the whole pipeline the same way
/// the HTTP endpoint does.
#[tokio::test]
async fn params_config_end_to_end() {
    let params: HashMap<String, String> = [
        ("canvasWidth", "640"),
        ("canvasHeight", "480"),
        ("width", "64"),
        ("height", "64"),
        ("spacing", "2"),
        ("background", "#102030"),
        ("simulate", "true"),
        ("maxImages", "9"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = MosaicConfig::from_params(&params).unwrap();
    let source = StaticSource::new(Vec::<String>::new());
    let client = FixedClient {
        response: Err(FetchError::Http("unused".into())),
    };

    let png = MosaicPipeline::new(config, source, client)
        .generate()
        .await
        .unwrap();

    let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
    assert_eq!(decoded.width(), 640);
    assert_eq!(decoded.height(), 480);
    // Corners lie outside the fitted grid and show the background color.
    assert_eq!(decoded.get_pixel(0, 0), &Rgba([0x10, 0x20, 0x30, 255]));
}

/// An HTML directory page feeds the pipeline through the scraping source.
#[tokio::test]
async fn html_directory_end_to_end() {
    let page = r#"
        <html><body>
        <div class="avatar img-profile" style="background-image: url('http://photos.test/ok/a.jpg')"></div>
        <div class="avatar img-profile" style="background-image: url('http://photos.test/ok/b.jpg')"></div>
        <div class="unrelated" style="background-image: url('http://photos.test/skip.jpg')"></div>
        </body></html>
    "#;

    // One client serves both the directory page and the portraits.
    #[derive(Clone)]
    struct SiteClient {
        page: String,
    }

    impl AsyncHttpClient for SiteClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            if url.ends_with("/team") {
                Ok(self.page.clone().into_bytes())
            } else {
                Ok(png_bytes(300, 300, [10, 120, 10, 255]))
            }
        }
    }

    let client = SiteClient {
        page: page.to_string(),
    };
    let source = HtmlDirectorySource::new(client.clone(), "http://photos.test/team", "img-profile");
    let config = MosaicConfig::default();

    let png = MosaicPipeline::new(config, source, client)
        .generate()
        .await
        .unwrap();
    assert!(image::load_from_memory(&png).is_ok());
}

/// With randomize off, the same inputs yield byte-identical output.
#[tokio::test]
async fn output_is_deterministic_without_randomize() {
    let client = FixedClient {
        response: Ok(png_bytes(300, 400, [200, 40, 40, 255])),
    };

    let mut renders = Vec::new();
    for _ in 0..2 {
        let pipeline = MosaicPipeline::new(
            MosaicConfig::default(),
            StaticSource::new(urls(8)),
            client.clone(),
        );
        renders.push(pipeline.generate().await.unwrap());
    }
    assert_eq!(renders[0], renders[1]);
}

/// An empty directory is a hard failure, not an empty image.
#[tokio::test]
async fn empty_directory_fails() {
    let config = MosaicConfig::default();
    let source = StaticSource::new(Vec::<String>::new());
    let client = FixedClient {
        response: Ok(Vec::new()),
    };

    let err = MosaicPipeline::new(config, source, client)
        .generate()
        .await
        .unwrap_err();
    assert!(matches!(err, MosaicError::Layout(_)));
}
