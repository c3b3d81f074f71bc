//! Tracing subscriber setup for the command-line front ends

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install a stderr `fmt` subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"warn"` or
/// `"wordle_nine=debug"`) is used, falling back to `warn` if it does not parse.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
