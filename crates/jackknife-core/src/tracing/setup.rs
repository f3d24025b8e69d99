//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "JACKKNIFE_LOG";

/// Filter used when `JACKKNIFE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "jackknife=info";

/// Initialize the JackKnife tracing/logging system.
///
/// Reads `JACKKNIFE_LOG` for per-module log levels.
/// Format: `JACKKNIFE_LOG=jackknife_analysis=debug,jackknife_core=warn`
///
/// Falls back to `jackknife=info` if `JACKKNIFE_LOG` is not set or is invalid.
/// Output goes to stderr so JSON results on stdout stay clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        // try_init: a test harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Filter from `JACKKNIFE_LOG`, or [`DEFAULT_FILTER`] when it is unset or
/// does not parse.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
