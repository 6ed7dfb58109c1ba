//! Logging infrastructure.
//!
//! Structured console logging via `tracing`, filtered through the
//! `RUST_LOG` environment variable (default level: `info`).

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at process start. Subsequent calls are ignored, so tests
/// and embedding applications can both call it safely.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
