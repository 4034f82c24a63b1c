//! Logging configuration using tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging subsystem
///
/// Logs go to stderr so stdout stays clean for command output.
/// Log level is controlled by the `DEVOPEN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DEVOPEN_LOG=debug devopen mydb
/// ```
pub fn init() {
    // Default to info, allow override via DEVOPEN_LOG
    let env_filter =
        EnvFilter::try_from_env("DEVOPEN_LOG").unwrap_or_else(|_| EnvFilter::new("devopen=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
