//! Session launch: turns a `SessionRequest` into everything the realtime
//! runtime needs to start talking.

use serde::{Deserialize, Serialize};

use super::scenario::{Scenario, ScenarioRegistry};
use crate::agent::Voice;
use crate::error::AgencyResult;
use crate::tools::{ToolDefinition, ToolRegistry};

/// Launch parameters as they arrive from a front-end query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(default)]
    pub agent_config: Option<String>,
    #[serde(default)]
    pub initial_prompt: Option<String>,
}

impl SessionRequest {
    pub fn for_scenario(key: impl Into<String>) -> Self {
        Self {
            agent_config: Some(key.into()),
            initial_prompt: None,
        }
    }
}

/// One agent, fully resolved for the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSession {
    pub name: String,
    pub voice: Voice,
    pub handoff_description: String,
    pub instructions: String,
    pub handoffs: Vec<String>,
    pub tools: Vec<ToolDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub scenario: String,
    pub company_name: String,
    pub root_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_prompt: Option<String>,
    pub agents: Vec<AgentSession>,
}

impl SessionConfig {
    pub fn agent(&self, name: &str) -> Option<&AgentSession> {
        self.agents.iter().find(|a| a.name == name)
    }
}

impl ScenarioRegistry {
    /// Scenario named by the request, or the default one
    pub fn resolve_request(&self, request: &SessionRequest) -> AgencyResult<&Scenario> {
        self.resolve(request.agent_config.as_deref())
    }
}

impl Scenario {
    /// Resolve every agent's handoff targets and tool schemas against `tools`
    pub async fn launch(
        &self,
        tools: &ToolRegistry,
        initial_prompt: Option<String>,
    ) -> AgencyResult<SessionConfig> {
        let mut agents = Vec::with_capacity(self.agents().len());
        for agent in self.agents() {
            agents.push(AgentSession {
                name: agent.name.clone(),
                voice: agent.voice,
                handoff_description: agent.handoff_description.clone(),
                instructions: agent.instructions.clone(),
                handoffs: self.handoffs().targets(&agent.name).to_vec(),
                tools: tools.definitions_for(&agent.tools).await?,
            });
        }

        tracing::info!(
            "Launching scenario '{}' with root agent '{}'",
            self.key(),
            self.root().name
        );

        Ok(SessionConfig {
            scenario: self.key().to_string(),
            company_name: self.company_name().to_string(),
            root_agent: self.root().name.clone(),
            initial_prompt: initial_prompt.filter(|p| !p.trim().is_empty()),
            agents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgencyError;
    use crate::services::MemorySink;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_launch_default_scenario() {
        let registry = ScenarioRegistry::builtin();
        let request = SessionRequest {
            agent_config: None,
            initial_prompt: Some("I sort invoices by hand".to_string()),
        };

        let scenario = registry.resolve_request(&request).unwrap();
        let tools = scenario.tool_registry(Arc::new(MemorySink::new())).await.unwrap();
        let session = scenario.launch(&tools, request.initial_prompt.clone()).await.unwrap();

        assert_eq!(session.scenario, "ideaEvaluator");
        assert_eq!(session.root_agent, "ideaDiscovery");
        assert_eq!(session.initial_prompt.as_deref(), Some("I sort invoices by hand"));

        let discovery = session.agent("ideaDiscovery").unwrap();
        assert_eq!(discovery.handoffs, vec!["ideaAssessment".to_string()]);
        assert!(discovery.tools.is_empty());

        let assessment = session.agent("ideaAssessment").unwrap();
        assert_eq!(assessment.tools[0].name, "calculateAutomationScore");
        assert!(assessment.handoffs.is_empty());
    }

    #[test]
    fn test_request_from_query_names() {
        let request: SessionRequest =
            serde_json::from_value(serde_json::json!({ "agentConfig": "norwegianIntake" })).unwrap();
        assert_eq!(request, SessionRequest::for_scenario("norwegianIntake"));

        let unknown = SessionRequest::for_scenario("simpleHandoff");
        assert!(matches!(
            ScenarioRegistry::builtin().resolve_request(&unknown),
            Err(AgencyError::UnknownScenario(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_prompt_dropped() {
        let scenario = ScenarioRegistry::builtin().get("unifiedNorwegianIntake").unwrap();
        let tools = scenario.tool_registry(Arc::new(MemorySink::new())).await.unwrap();
        let session = scenario.launch(&tools, Some("  ".to_string())).await.unwrap();

        assert!(session.initial_prompt.is_none());
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("initialPrompt").is_none());
        assert_eq!(json["agents"][0]["voice"], "sage");
    }
}
