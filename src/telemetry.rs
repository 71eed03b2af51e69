//! Logging setup for the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{AgencyError, AgencyResult};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used.
pub fn init_logging(default_filter: &str) -> AgencyResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AgencyError::Config(format!("invalid log filter '{}': {}", default_filter, e)))?;

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| AgencyError::Config(format!("logging already initialised: {}", e)))
}
