//! Automation assessment tools: scoring matrix and implementation roadmap.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{Tool, ToolOutput};
use crate::error::{AgencyError, AgencyResult};
use crate::roadmap;
use crate::scoring::{compute_score, TaskProfile};

pub const CALCULATE_AUTOMATION_SCORE: &str = "calculateAutomationScore";
pub const GENERATE_AUTOMATION_ROADMAP: &str = "generateAutomationRoadmap";

/// Scores a task profile and recommends a tier
#[derive(Debug, Default, Clone, Copy)]
pub struct CalculateAutomationScoreTool;

#[async_trait]
impl Tool for CalculateAutomationScoreTool {
    fn name(&self) -> String {
        CALCULATE_AUTOMATION_SCORE.to_string()
    }

    fn description(&self) -> String {
        "Calculate a comprehensive automation scoring matrix for an idea or task".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "taskDescription": {
                    "type": "string",
                    "description": "Brief description of the task or process to be automated"
                },
                "frequency": {
                    "type": "string",
                    "enum": ["daily", "weekly", "monthly", "rarely"],
                    "description": "How often this task is performed"
                },
                "timeSpent": {
                    "type": "string",
                    "enum": ["minutes", "hours", "days"],
                    "description": "Time spent per occurrence"
                },
                "timeAmount": {
                    "type": "number",
                    "description": "Numeric amount of time (e.g., 2 for \"2 hours\")"
                },
                "skillLevel": {
                    "type": "string",
                    "enum": ["low", "medium", "high"],
                    "description": "Skill level required to perform this task"
                },
                "errorTolerance": {
                    "type": "string",
                    "enum": ["low", "medium", "high"],
                    "description": "Consequence if automation makes a mistake"
                },
                "integrations": {
                    "type": "string",
                    "enum": ["single", "multiple", "complex"],
                    "description": "Number and complexity of systems involved"
                },
                "outcomeKPI": {
                    "type": "string",
                    "enum": ["time_savings", "cost_reduction", "quality_improvement", "revenue_generation"],
                    "description": "Primary KPI this automation would impact"
                },
                "hourlyValue": {
                    "type": "number",
                    "description": "Estimated hourly value of the person performing this task"
                },
                "currentPainPoints": {
                    "type": "string",
                    "description": "Current pain points or inefficiencies with this task"
                }
            },
            "required": [
                "frequency", "timeSpent", "timeAmount", "skillLevel",
                "errorTolerance", "integrations", "outcomeKPI", "hourlyValue"
            ],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let profile: TaskProfile = serde_json::from_value(params)
            .map_err(|e| AgencyError::schema(CALCULATE_AUTOMATION_SCORE, e.to_string()))?;
        profile.validate()?;

        let result = compute_score(&profile);
        info!(
            "Scored task '{}': overall {} -> {} tier",
            profile.task_description.as_deref().unwrap_or("unnamed"),
            result.scorecard.overall.score,
            result.recommendation.tier
        );

        let summary = format!(
            "Overall automation score {}/10. Recommended tier: {} ({}, {}). Confidence: {:?}. Estimated savings: {} hours / {} per month.",
            result.scorecard.overall.score,
            result.recommendation.tier,
            result.recommendation.solution,
            result.recommendation.delivery_time,
            result.recommendation.confidence,
            result.roi.monthly_time_saved,
            result.roi.monthly_value_saved,
        );

        Ok(ToolOutput::success(serde_json::to_value(&result)?, summary))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RoadmapParams {
    tier: String,
    task_description: String,
    #[serde(default)]
    current_pain_points: Option<String>,
}

/// Returns the phase/tool/budget roadmap for a recommended tier
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateAutomationRoadmapTool;

#[async_trait]
impl Tool for GenerateAutomationRoadmapTool {
    fn name(&self) -> String {
        GENERATE_AUTOMATION_ROADMAP.to_string()
    }

    fn description(&self) -> String {
        "Generate a detailed automation roadmap based on scoring results".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "tier": {
                    "type": "string",
                    "enum": ["Low", "Mid", "Premium"],
                    "description": "Recommended automation tier"
                },
                "taskDescription": {
                    "type": "string",
                    "description": "Description of the task to be automated"
                },
                "currentPainPoints": {
                    "type": "string",
                    "description": "Current pain points with the task"
                }
            },
            "required": ["tier", "taskDescription"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: RoadmapParams = serde_json::from_value(params)
            .map_err(|e| AgencyError::schema(GENERATE_AUTOMATION_ROADMAP, e.to_string()))?;

        let result = roadmap::select_roadmap(
            &params.tier,
            &params.task_description,
            params.current_pain_points.as_deref(),
        )?;

        let summary = format!(
            "{} tier roadmap for '{}': {} phases over {}, budget {}.",
            result.tier,
            result.task_description,
            result.roadmap.phases.len(),
            result.roadmap.timeline,
            result.roadmap.budget,
        );

        Ok(ToolOutput::success(serde_json::to_value(&result)?, summary))
    }
}
