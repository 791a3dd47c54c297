//! Tracing subscriber setup for the binaries.
//!
//! Logs go to stderr so JSON written to stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the level chosen here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `default_level` applies when `verbose` is off and `RUST_LOG` is unset.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
