//! End-to-end scenarios across the scoring engine, roadmap selector and the
//! tool boundary.

use serde_json::json;
use std::sync::Arc;

use realtime_agency::orchestrator::{ScenarioRegistry, NORWEGIAN_INTAKE, UNIFIED_NORWEGIAN_INTAKE};
use realtime_agency::scoring::{Confidence, Tier};
use realtime_agency::services::MemorySink;
use realtime_agency::tools::ToolCall;
use realtime_agency::{compute_score, select_roadmap, AgencyError, TaskProfile};

fn daily_two_hours() -> TaskProfile {
    serde_json::from_value(json!({
        "taskDescription": "Categorise support emails",
        "frequency": "daily",
        "timeSpent": "hours",
        "timeAmount": 2,
        "skillLevel": "medium",
        "errorTolerance": "medium",
        "integrations": "multiple",
        "outcomeKPI": "time_savings",
        "hourlyValue": 100
    }))
    .unwrap()
}

#[test]
fn daily_two_hour_task_is_mid_tier() {
    let result = compute_score(&daily_two_hours());

    assert_eq!(result.scorecard.frequency.score, 10.0);
    assert_eq!(result.scorecard.time_impact.score, 4.0);
    assert_eq!(result.scorecard.time_impact.label, "2 hours");
    assert_eq!(result.scorecard.complexity.score, 5.0);
    assert_eq!(result.scorecard.complexity.label, "medium skill, multiple integrations");
    assert_eq!(result.scorecard.risk.label, "medium tolerance");
    assert_eq!(result.scorecard.overall.score, 6.0);

    assert_eq!(result.roi.monthly_time_saved, 8.7);
    assert_eq!(result.roi.monthly_value_saved, 866.0);

    assert_eq!(result.recommendation.tier, Tier::Mid);
    assert_eq!(result.recommendation.solution, "Custom automation solution");
    assert_eq!(result.recommendation.delivery_time, "3-4 weeks");
    assert_eq!(result.recommendation.confidence, Confidence::High);

    assert_eq!(result.insights.strengths, vec!["High frequency task"]);
    assert!(result.insights.concerns.is_empty());
}

#[test]
fn zero_time_amount_scores_minimum_impact() {
    let mut profile = daily_two_hours();
    profile.time_amount = 0.0;

    let result = compute_score(&profile);
    assert_eq!(result.scorecard.time_impact.score, 1.0);
    assert_eq!(result.roi.monthly_value_saved, 0.0);
    assert!(result.insights.concerns.contains(&"Limited ROI potential".to_string()));
}

#[test]
fn premium_roadmap_has_three_phases() {
    let result = select_roadmap("Premium", "Customer onboarding", Some("Manual data entry")).unwrap();
    assert_eq!(result.roadmap.phases.len(), 3);
    assert_eq!(result.roadmap.budget, "€20,000-50,000+");

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["roadmap"]["phase3"].is_object());
    assert_eq!(json["currentPainPoints"], "Manual data entry");
    assert_eq!(json["nextSteps"].as_array().unwrap().len(), 5);
}

#[test]
fn unknown_tier_key_is_rejected() {
    let err = select_roadmap("Invalid", "x", None).unwrap_err();
    assert!(matches!(err, AgencyError::InvalidTierKey(ref k) if k == "Invalid"));
}

#[tokio::test]
async fn assessment_agent_scores_then_plans() {
    let scenario = ScenarioRegistry::builtin().resolve(None).unwrap();
    let tools = scenario.tool_registry(Arc::new(MemorySink::new())).await.unwrap();

    let score = tools
        .execute(&ToolCall::new("calculateAutomationScore", serde_json::to_value(daily_two_hours()).unwrap()))
        .await
        .unwrap();
    let tier = score.data["recommendation"]["tier"].as_str().unwrap().to_string();
    assert_eq!(tier, "Mid");

    let plan = tools
        .execute(&ToolCall::new(
            "generateAutomationRoadmap",
            json!({ "tier": tier, "taskDescription": "Categorise support emails" }),
        ))
        .await
        .unwrap();
    assert_eq!(plan.data["roadmap"]["timeline"], "6-8 weeks");
}

#[tokio::test]
async fn schema_violations_never_reach_the_engine() {
    let scenario = ScenarioRegistry::builtin().resolve(None).unwrap();
    let tools = scenario.tool_registry(Arc::new(MemorySink::new())).await.unwrap();

    let mut args = serde_json::to_value(daily_two_hours()).unwrap();
    args["frequency"] = json!("hourly");
    let err = tools.execute(&ToolCall::new("calculateAutomationScore", args)).await.unwrap_err();
    assert!(matches!(err, AgencyError::SchemaViolation { .. }));

    let err = tools
        .execute(&ToolCall::new("generateAutomationRoadmap", json!({ "tier": "Gold", "taskDescription": "x" })))
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::SchemaViolation { .. }));

    let err = tools
        .execute(&ToolCall::new("register_consent", json!({ "granted": true })))
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::UnknownTool(_)));
}

#[tokio::test]
async fn unified_intake_emits_records_in_order() {
    let sink = Arc::new(MemorySink::new());
    let scenario = ScenarioRegistry::builtin().get(UNIFIED_NORWEGIAN_INTAKE).unwrap();
    let tools = scenario.tool_registry(sink.clone()).await.unwrap();

    let calls = [
        ToolCall::new("register_consent", json!({ "granted": true })),
        ToolCall::new("log_interview_progress", json!({ "phase": "BASIC_INFO", "presenting_complaint": "Hodepine" })),
        ToolCall::new(
            "track_clarification_needed",
            json!({ "vague_response": "En stund", "clarification_type": "TIMING", "resolution_status": "STILL_VAGUE" }),
        ),
        ToolCall::new("generate_interview_summary", json!({ "summary_type": "MEDICAL" })),
        ToolCall::new(
            "save_interview_summary",
            json!({ "interview_date": "2026-10-19", "presenting_complaint": "Hodepine", "summary": "Hodepine i tre dager" }),
        ),
    ];
    for call in &calls {
        tools.execute(call).await.unwrap();
    }

    let kinds: Vec<String> = sink.records().into_iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec!["consent", "interview_progress", "clarification", "interview_summary"]);
}

#[tokio::test]
async fn phase_sets_differ_between_intake_scenarios() {
    let sink = Arc::new(MemorySink::new());
    let registry = ScenarioRegistry::builtin();

    let paired = registry.get(NORWEGIAN_INTAKE).unwrap().tool_registry(sink.clone()).await.unwrap();
    let unified = registry.get(UNIFIED_NORWEGIAN_INTAKE).unwrap().tool_registry(sink.clone()).await.unwrap();

    let basic_info = ToolCall::new("log_interview_progress", json!({ "phase": "BASIC_INFO" }));
    assert!(unified.execute(&basic_info).await.is_ok());
    assert!(matches!(
        paired.execute(&basic_info).await,
        Err(AgencyError::SchemaViolation { .. })
    ));

    let results = paired
        .execute_parallel(&[
            ToolCall::new("log_interview_progress", json!({ "phase": "PHASE1_BASICS" })),
            ToolCall::new("log_interview_progress", json!({ "phase": "PHASE2_DIAGNOSTICS" })),
        ])
        .await;
    assert!(results.iter().all(Result::is_ok));
    assert_eq!(sink.len(), 3);
}

#[tokio::test]
async fn overflowing_savings_are_rejected_at_the_boundary() {
    let scenario = ScenarioRegistry::builtin().resolve(None).unwrap();
    let tools = scenario.tool_registry(Arc::new(MemorySink::new())).await.unwrap();

    let mut args = serde_json::to_value(daily_two_hours()).unwrap();
    args["timeSpent"] = json!("days");
    args["timeAmount"] = json!(1e300);
    args["hourlyValue"] = json!(1e300);

    let err = tools.execute(&ToolCall::new("calculateAutomationScore", args)).await.unwrap_err();
    assert!(matches!(err, AgencyError::SchemaViolation { .. }));
}
