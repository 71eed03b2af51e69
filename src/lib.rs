//! Realtime Agency
//!
//! Scenario, agent and tool definitions backing a realtime voice-agent runtime:
//! - Automation opportunity scoring and tiered roadmaps
//! - Patient intake consent and interview loggers
//! - Tool registry with schema-checked calls
//! - Validated agent handoff graphs and session launch
//! - HTTP transport for tool calls

pub mod agent;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod roadmap;
pub mod scoring;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod tools;

// Re-exports for convenience
pub use error::{AgencyError, AgencyResult};
pub use orchestrator::{Scenario, ScenarioRegistry, SessionConfig, SessionRequest};
pub use roadmap::select_roadmap;
pub use scoring::{compute_score, ScoringResult, TaskProfile};
pub use tools::ToolRegistry;
