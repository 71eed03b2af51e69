//! Roadmap Module
//!
//! Static implementation roadmaps keyed by tier. Selection is a table lookup
//! that echoes the caller's task description back into the result.

mod templates;

pub use templates::{template_for, Phase, RoadmapTemplate, NEXT_STEPS};

use serde::Serialize;

use crate::error::AgencyResult;
use crate::scoring::Tier;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    pub tier: Tier,
    pub task_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_pain_points: Option<String>,
    pub roadmap: &'static RoadmapTemplate,
    pub next_steps: &'static [&'static str],
}

/// Look up the roadmap for a tier key.
///
/// The key is parsed before the template table is consulted; anything other
/// than `Low`, `Mid` or `Premium` is rejected with `InvalidTierKey`.
pub fn select_roadmap(
    tier: &str,
    task_description: &str,
    current_pain_points: Option<&str>,
) -> AgencyResult<RoadmapResult> {
    let tier: Tier = tier.parse()?;
    Ok(roadmap_for(tier, task_description, current_pain_points))
}

pub fn roadmap_for(
    tier: Tier,
    task_description: &str,
    current_pain_points: Option<&str>,
) -> RoadmapResult {
    RoadmapResult {
        tier,
        task_description: task_description.to_string(),
        current_pain_points: current_pain_points.map(str::to_string),
        roadmap: template_for(tier),
        next_steps: &NEXT_STEPS,
    }
}
