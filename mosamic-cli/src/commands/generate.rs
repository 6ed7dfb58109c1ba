//! Generate command - render one mosaic to a PNG file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use mosamic::fetch::AsyncReqwestClient;
use mosamic::pipeline::MosaicPipeline;
use mosamic::source::{HtmlDirectorySource, JsonDirectorySource};

use super::common::{OutputOptions, SourceKind, SourceOptions};
use crate::error::CliError;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Output file path
    #[arg(long = "output", short = 'o', default_value = "mosaic.png")]
    pub output_file: PathBuf,

    /// Per-download timeout in seconds
    #[arg(long, default_value_t = 20)]
    pub timeout: u64,
}

/// Run the generate command.
pub async fn run(args: GenerateArgs) -> Result<(), CliError> {
    let config = args.output.to_config()?;
    let client = AsyncReqwestClient::new().map_err(|e| CliError::Config(e.to_string()))?;

    println!("Mosamic v{}", mosamic::VERSION);
    println!("Source: {}", args.source.source_url);
    println!("Canvas: {}x{}", config.canvas_width, config.canvas_height);

    let bar = progress_bar();
    let bar_tick = bar.clone();
    let progress: mosamic::fetch::ProgressCallback = Arc::new(move |completed, total| {
        bar_tick.set_length(total as u64);
        bar_tick.set_position(completed as u64);
    });

    let png = match args.source.source_kind {
        SourceKind::Html => {
            let source = HtmlDirectorySource::new(
                client.clone(),
                &args.source.source_url,
                &args.source.marker_class,
            );
            MosaicPipeline::new(config, source, client)
                .with_timeout(Duration::from_secs(args.timeout))
                .with_progress(progress)
                .generate()
                .await
        }
        SourceKind::Json => {
            let source = JsonDirectorySource::new(
                client.clone(),
                &args.source.source_url,
                &args.source.pointer,
            );
            MosaicPipeline::new(config, source, client)
                .with_timeout(Duration::from_secs(args.timeout))
                .with_progress(progress)
                .generate()
                .await
        }
    }
    .map_err(|e| CliError::Generate(e.to_string()))?;

    bar.finish_and_clear();

    std::fs::write(&args.output_file, &png).map_err(|e| CliError::Io(e.to_string()))?;
    println!("Wrote {} ({} bytes)", args.output_file.display(), png.len());
    Ok(())
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} tiles")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
