//! CLI error type.

use std::fmt;

/// Errors surfaced to the terminal user.
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line or derived configuration.
    Config(String),
    /// Mosaic generation failed.
    Generate(String),
    /// Writing the output file failed.
    Io(String),
    /// The HTTP service failed to start or crashed.
    Serve(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Generate(msg) => write!(f, "Generation failed: {}", msg),
            CliError::Io(msg) => write!(f, "I/O error: {}", msg),
            CliError::Serve(msg) => write!(f, "Service error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}
