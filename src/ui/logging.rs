//! ui::logging
//!
//! Install the `tracing` subscriber for the binary.
//!
//! `SPACEGIT_LOG` (an `EnvFilter` directive) wins over the configured level.
//! Logs always go to stderr so stdout stays parseable.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "SPACEGIT_LOG";

/// Build the filter: `SPACEGIT_LOG` if set and valid, else `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install a global subscriber. A second call is a no-op.
pub fn init(level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(filter(level));

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
