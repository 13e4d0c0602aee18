//! Tracing setup for the `dewcheck` binary.
//!
//! Everything goes to stderr so stdout carries only the report. Records
//! emitted through the `log` facade by `dewcheck-core` are forwarded by the
//! subscriber's `tracing-log` bridge.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `--verbose` when both are given. Calling this twice
/// is harmless; the second call is ignored.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
