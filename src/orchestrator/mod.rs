//! Orchestrator Module
//!
//! Scenarios group agents behind a validated handoff graph and launch them as
//! session configurations for the realtime runtime.

mod handoff;
mod scenario;
mod session;

pub use handoff::{HandoffGraph, HandoffGraphBuilder};
pub use scenario::{
    Scenario, ScenarioRegistry, ScenarioSummary, DEFAULT_SCENARIO, IDEA_EVALUATOR,
    NORWEGIAN_INTAKE, UNIFIED_NORWEGIAN_INTAKE,
};
pub use session::{AgentSession, SessionConfig, SessionRequest};
