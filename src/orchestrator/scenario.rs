//! Scenario catalog: which agents exist, who may hand off to whom, and which
//! tools back them.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::handoff::HandoffGraph;
use crate::agent::{prompts, AgentDefinition, SampleIdea, Voice, SAMPLE_IDEAS};
use crate::error::{AgencyError, AgencyResult};
use crate::services::RecordSink;
use crate::tools::{
    CalculateAutomationScoreTool, GenerateAutomationRoadmapTool, GenerateInterviewSummaryTool,
    LogInterviewProgressTool, LogPermissionGrantedTool, RegisterConsentTool,
    SaveInterviewSummaryTool, Tool, ToolRegistry, TrackClarificationTool,
    CALCULATE_AUTOMATION_SCORE, GENERATE_AUTOMATION_ROADMAP, TWO_AGENT_INTERVIEW_PHASES,
    UNIFIED_INTERVIEW_PHASES,
};

pub const IDEA_EVALUATOR: &str = "ideaEvaluator";
pub const NORWEGIAN_INTAKE: &str = "norwegianIntake";
pub const UNIFIED_NORWEGIAN_INTAKE: &str = "unifiedNorwegianIntake";
pub const DEFAULT_SCENARIO: &str = IDEA_EVALUATOR;

/// A named set of agents sharing one handoff graph. The first agent is the root.
#[derive(Debug, Clone)]
pub struct Scenario {
    key: String,
    company_name: String,
    agents: Vec<AgentDefinition>,
    handoffs: HandoffGraph,
    interview_phases: &'static [&'static str],
    samples: &'static [SampleIdea],
}

impl Scenario {
    /// Build a scenario, validating agent names and handoff edges
    pub fn new(
        key: impl Into<String>,
        company_name: impl Into<String>,
        agents: Vec<AgentDefinition>,
        edges: &[(&str, &str)],
    ) -> AgencyResult<Self> {
        let key = key.into();
        if agents.is_empty() {
            return Err(AgencyError::Handoff(format!("scenario '{}' has no agents", key)));
        }

        let mut seen = HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.name.as_str()) {
                return Err(AgencyError::Handoff(format!(
                    "agent '{}' declared twice in scenario '{}'",
                    agent.name, key
                )));
            }
        }

        let handoffs = edges
            .iter()
            .fold(HandoffGraph::builder(agents.iter().map(|a| a.name.clone())), |b, (from, to)| {
                b.edge(*from, *to)
            })
            .build()?;

        Ok(Self {
            key,
            company_name: company_name.into(),
            agents,
            handoffs,
            interview_phases: &[],
            samples: &[],
        })
    }

    /// Phase set accepted by `log_interview_progress` in this scenario
    pub fn with_interview_phases(mut self, phases: &'static [&'static str]) -> Self {
        self.interview_phases = phases;
        self
    }

    pub fn with_samples(mut self, samples: &'static [SampleIdea]) -> Self {
        self.samples = samples;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn agents(&self) -> &[AgentDefinition] {
        &self.agents
    }

    pub fn root(&self) -> &AgentDefinition {
        &self.agents[0]
    }

    pub fn agent(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn handoffs(&self) -> &HandoffGraph {
        &self.handoffs
    }

    pub fn samples(&self) -> &'static [SampleIdea] {
        self.samples
    }

    /// Tool names referenced by any agent, first occurrence order
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.agents.iter().flat_map(|a| a.tools.iter()) {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Instantiate and register every tool this scenario's agents reference
    pub async fn tool_registry(&self, sink: Arc<dyn RecordSink>) -> AgencyResult<ToolRegistry> {
        let registry = ToolRegistry::new();
        for name in self.tool_names() {
            let tool = build_tool(&name, &sink, self.interview_phases)?;
            registry.register_arc(tool).await;
        }
        tracing::debug!(
            "Scenario '{}' registered tools: {:?}",
            self.key,
            registry.tool_names().await
        );
        Ok(registry)
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            key: self.key.clone(),
            company_name: self.company_name.clone(),
            root_agent: self.root().name.clone(),
            agents: self.agents.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

fn build_tool(
    name: &str,
    sink: &Arc<dyn RecordSink>,
    phases: &'static [&'static str],
) -> AgencyResult<Arc<dyn Tool>> {
    let tool: Arc<dyn Tool> = match name {
        CALCULATE_AUTOMATION_SCORE => Arc::new(CalculateAutomationScoreTool),
        GENERATE_AUTOMATION_ROADMAP => Arc::new(GenerateAutomationRoadmapTool),
        "register_consent" => Arc::new(RegisterConsentTool::new(sink.clone())),
        "log_permission_granted" => Arc::new(LogPermissionGrantedTool::new(sink.clone())),
        "log_interview_progress" => Arc::new(LogInterviewProgressTool::new(sink.clone(), phases)),
        "save_interview_summary" => Arc::new(SaveInterviewSummaryTool::new(sink.clone())),
        "track_clarification_needed" => Arc::new(TrackClarificationTool::new(sink.clone())),
        "generate_interview_summary" => Arc::new(GenerateInterviewSummaryTool),
        other => return Err(AgencyError::UnknownTool(other.to_string())),
    };
    Ok(tool)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub key: String,
    pub company_name: String,
    pub root_agent: String,
    pub agents: Vec<String>,
}

/// All launchable scenarios plus the key used when none is requested
#[derive(Debug, Clone)]
pub struct ScenarioRegistry {
    scenarios: Vec<Scenario>,
    default_key: String,
}

lazy_static! {
    static ref BUILTIN: ScenarioRegistry =
        builtin_scenarios().expect("built-in scenarios form valid handoff graphs");
}

impl ScenarioRegistry {
    pub fn new(scenarios: Vec<Scenario>, default_key: impl Into<String>) -> AgencyResult<Self> {
        let registry = Self {
            scenarios,
            default_key: String::new(),
        };
        registry.with_default(default_key)
    }

    /// The three shipped scenarios, built once
    pub fn builtin() -> &'static ScenarioRegistry {
        &BUILTIN
    }

    /// Same catalog with a different default scenario
    pub fn with_default(mut self, key: impl Into<String>) -> AgencyResult<Self> {
        let key = key.into();
        self.get(&key)?;
        self.default_key = key;
        Ok(self)
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn keys(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.key()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn get(&self, key: &str) -> AgencyResult<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| AgencyError::UnknownScenario(key.to_string()))
    }

    /// Requested scenario, or the default when no key (or an empty one) is given
    pub fn resolve(&self, key: Option<&str>) -> AgencyResult<&Scenario> {
        match key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => self.get(key),
            None => self.get(&self.default_key),
        }
    }

    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(Scenario::summary).collect()
    }
}

fn builtin_scenarios() -> AgencyResult<ScenarioRegistry> {
    let idea_evaluator = Scenario::new(
        IDEA_EVALUATOR,
        "Automation Insights",
        vec![
            AgentDefinition::new(
                "ideaDiscovery",
                "An AI agent that helps you explore and articulate automation ideas in a relaxed, open conversation",
            )
            .with_voice(Voice::Sage)
            .with_instructions(prompts::IDEA_DISCOVERY),
            AgentDefinition::new(
                "ideaAssessment",
                "An AI agent that performs detailed automation analysis and creates scoring matrices to determine the best automation approach",
            )
            .with_voice(Voice::Sage)
            .with_instructions(prompts::IDEA_ASSESSMENT)
            .with_tools([CALCULATE_AUTOMATION_SCORE, GENERATE_AUTOMATION_ROADMAP]),
        ],
        &[("ideaDiscovery", "ideaAssessment")],
    )?
    .with_samples(SAMPLE_IDEAS);

    let norwegian_intake = Scenario::new(
        NORWEGIAN_INTAKE,
        "Norsk Helsevesen",
        vec![
            AgentDefinition::new(
                "permissionRequest",
                "The initial agent that greets the patient in Norwegian, explains the intake process, and requests permission to conduct the interview.",
            )
            .with_voice(Voice::Sage)
            .with_instructions(prompts::PERMISSION_REQUEST)
            .with_tools(["log_permission_granted"]),
            AgentDefinition::new(
                "interview",
                "The interview agent that conducts a structured three-phase patient intake interview in Norwegian, gathering comprehensive medical information.",
            )
            .with_voice(Voice::Sage)
            .with_instructions(prompts::INTERVIEW)
            .with_tools([
                "log_interview_progress",
                "save_interview_summary",
                "generate_interview_summary",
            ]),
        ],
        &[("permissionRequest", "interview"), ("interview", "permissionRequest")],
    )?
    .with_interview_phases(TWO_AGENT_INTERVIEW_PHASES);

    let unified_intake = Scenario::new(
        UNIFIED_NORWEGIAN_INTAKE,
        "Norsk Helsevesen",
        vec![AgentDefinition::new(
            "unifiedNorwegianIntake",
            "A comprehensive Norwegian healthcare intake agent that handles permission requests and conducts structured medical interviews.",
        )
        .with_voice(Voice::Sage)
        .with_instructions(prompts::UNIFIED_INTAKE)
        .with_tools([
            "register_consent",
            "log_interview_progress",
            "save_interview_summary",
            "track_clarification_needed",
            "generate_interview_summary",
        ])],
        &[],
    )?
    .with_interview_phases(UNIFIED_INTERVIEW_PHASES);

    ScenarioRegistry::new(vec![idea_evaluator, norwegian_intake, unified_intake], DEFAULT_SCENARIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySink;

    #[test]
    fn test_builtin_catalog() {
        let registry = ScenarioRegistry::builtin();
        assert_eq!(
            registry.keys(),
            vec![IDEA_EVALUATOR, NORWEGIAN_INTAKE, UNIFIED_NORWEGIAN_INTAKE]
        );
        assert_eq!(registry.default_key(), "ideaEvaluator");

        let evaluator = registry.get(IDEA_EVALUATOR).unwrap();
        assert_eq!(evaluator.root().name, "ideaDiscovery");
        assert!(evaluator.handoffs().can_hand_off("ideaDiscovery", "ideaAssessment"));
        assert!(!evaluator.handoffs().can_hand_off("ideaAssessment", "ideaDiscovery"));
        assert_eq!(evaluator.samples().len(), 5);

        let unified = registry.get(UNIFIED_NORWEGIAN_INTAKE).unwrap();
        assert!(unified.handoffs().is_empty());
        assert!(registry.iter().all(|s| s.agents().iter().all(|a| a.voice == Voice::Sage)));
    }

    #[test]
    fn test_resolve() {
        let registry = ScenarioRegistry::builtin();
        assert_eq!(registry.resolve(None).unwrap().key(), IDEA_EVALUATOR);
        assert_eq!(registry.resolve(Some("")).unwrap().key(), IDEA_EVALUATOR);
        assert_eq!(registry.resolve(Some(NORWEGIAN_INTAKE)).unwrap().company_name(), "Norsk Helsevesen");
        assert!(matches!(
            registry.resolve(Some("chatSupervisor")),
            Err(AgencyError::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_with_default() {
        let registry = ScenarioRegistry::builtin().clone().with_default(NORWEGIAN_INTAKE).unwrap();
        assert_eq!(registry.resolve(None).unwrap().key(), NORWEGIAN_INTAKE);
        assert!(ScenarioRegistry::builtin().clone().with_default("missing").is_err());
    }

    #[test]
    fn test_scenario_validation() {
        let err = Scenario::new("empty", "Co", vec![], &[]).unwrap_err();
        assert!(matches!(err, AgencyError::Handoff(_)));

        let twice = vec![AgentDefinition::new("a", ""), AgentDefinition::new("a", "")];
        assert!(Scenario::new("dup", "Co", twice, &[]).is_err());

        let agents = vec![AgentDefinition::new("a", "")];
        assert!(Scenario::new("bad", "Co", agents, &[("a", "b")]).is_err());
    }

    #[tokio::test]
    async fn test_tool_registries_per_scenario() {
        let registry = ScenarioRegistry::builtin();
        let sink = Arc::new(MemorySink::new());

        let evaluator = registry.get(IDEA_EVALUATOR).unwrap().tool_registry(sink.clone()).await.unwrap();
        assert_eq!(
            evaluator.tool_names().await,
            vec!["calculateAutomationScore", "generateAutomationRoadmap"]
        );

        let unified = registry
            .get(UNIFIED_NORWEGIAN_INTAKE)
            .unwrap()
            .tool_registry(sink.clone())
            .await
            .unwrap();
        assert_eq!(unified.tool_names().await.len(), 5);

        let progress = unified.get_tool("log_interview_progress").await.unwrap();
        assert_eq!(progress.parameters()["properties"]["phase"]["enum"][0], "PERMISSION_REQUEST");
    }

    #[tokio::test]
    async fn test_unknown_tool_reference() {
        let agents = vec![AgentDefinition::new("a", "").with_tools(["teleport"])];
        let scenario = Scenario::new("odd", "Co", agents, &[]).unwrap();
        match scenario.tool_registry(Arc::new(MemorySink::new())).await {
            Err(AgencyError::UnknownTool(name)) => assert_eq!(name, "teleport"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("registry built with an unknown tool"),
        }
    }
}
