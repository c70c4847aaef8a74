//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean for results. The filter is
//! read from `COERCE_LOG` when set (same syntax as `RUST_LOG`),
//! otherwise it follows the `-v` count.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "COERCE_LOG";

/// Default level for a given number of `-v` flags
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: logging disabled: {}", err);
    }
}
