//! Tool-call HTTP server for the realtime runtime.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use realtime_agency::config::AgencyConfig;
use realtime_agency::orchestrator::ScenarioRegistry;
use realtime_agency::server::{run_server, AppState};
use realtime_agency::services::TracingSink;
use realtime_agency::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = AgencyConfig::load().await?;
    telemetry::init_logging(&config.log_filter)?;

    let scenarios = ScenarioRegistry::builtin().clone().with_default(&config.default_scenario)?;
    info!("Serving scenarios: {}", scenarios.keys().join(", "));

    let state = AppState::new(scenarios, Arc::new(TracingSink)).await?;
    run_server(&config, state).await?;

    Ok(())
}
