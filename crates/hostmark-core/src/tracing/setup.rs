//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the hostmark tracing/logging system.
///
/// Reads the `HOSTMARK_LOG` environment variable for per-target log levels.
/// Format: `HOSTMARK_LOG=hostmark_annotation=debug,hostmark_storage=warn`
///
/// Falls back to `hostmark=info` if `HOSTMARK_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HOSTMARK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("hostmark=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
