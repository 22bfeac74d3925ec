//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use formstash_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "FORMSTASH_LOG";

/// Filter used when `FORMSTASH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "formstash=info";

static INIT: Once = Once::new();

/// Initialize the formstash tracing/logging system with structured JSON
/// output.
///
/// Reads `FORMSTASH_LOG` for per-crate log levels, e.g.
/// `FORMSTASH_LOG=formstash_storage=debug,formstash_stats=warn`.
///
/// Idempotent: only the first call of any `init_*` function installs a
/// subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

/// Initialize tracing from configuration. `FORMSTASH_LOG` still wins when
/// set, so operators can raise verbosity without editing config.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let result = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .with(filter)
            .try_init();
        if let Err(e) = result {
            // Another subscriber was installed by the host application.
            eprintln!("formstash: tracing already initialized: {e}");
        }
    });
}
