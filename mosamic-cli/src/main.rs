//! Mosamic CLI - Command-line interface
//!
//! This binary provides a command-line interface to the mosamic library:
//! one-shot mosaic rendering to a file, and an HTTP service hosting the
//! same pipeline behind `GET /api/mosaic`.

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{generate, serve};

#[derive(Parser)]
#[command(name = "mosamic", version = mosamic::VERSION, about = "Photo mosaics from remote image directories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one mosaic and write it to a PNG file
    Generate(generate::GenerateArgs),
    /// Host the mosaic HTTP endpoint
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    mosamic::logging::init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => generate::run(args).await,
        Command::Serve(args) => serve::run(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
