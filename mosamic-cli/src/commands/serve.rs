//! Serve command - host the mosaic HTTP endpoint.

use std::sync::Arc;

use clap::Args;
use mosamic::fetch::AsyncReqwestClient;
use mosamic::service::{router, ServiceState};
use tracing::info;

use super::common::SourceOptions;
use crate::error::CliError;

/// Arguments for the serve command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: SourceOptions,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,
}

/// Run the serve command. Blocks until the server exits.
pub async fn run(args: ServeArgs) -> Result<(), CliError> {
    let client = AsyncReqwestClient::new().map_err(|e| CliError::Config(e.to_string()))?;
    let state = Arc::new(ServiceState::new(
        &args.source.source_url,
        args.source.to_directory_kind(),
        client,
    ));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .map_err(|e| CliError::Serve(format!("Cannot bind {}: {}", args.bind, e)))?;

    println!("Mosamic v{}", mosamic::VERSION);
    println!("Serving /api/mosaic on http://{}", args.bind);
    println!("Directory: {}", args.source.source_url);
    info!(bind = %args.bind, "service started");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| CliError::Serve(e.to_string()))
}
