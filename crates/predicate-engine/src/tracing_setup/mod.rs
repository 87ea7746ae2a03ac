//! Tracing setup. Library crates only emit events; installing a subscriber
//! is left to whoever embeds the engine.

pub mod spans;

use std::sync::Once;

use predicate_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PREDICATE_LOG";

/// Install the global subscriber. Idempotent.
///
/// `PREDICATE_LOG` takes precedence over `config.log_filter`. If another
/// subscriber is already installed this is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);
        let installed = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
