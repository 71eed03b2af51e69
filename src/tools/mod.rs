//! Tool System Module
//!
//! Exposes the scoring engine, the roadmap selector and the intake loggers as
//! tools with declared JSON schemas. Arguments are validated against the
//! declared schema before any tool runs.

mod automation;
mod intake;
pub mod schema;

pub use automation::{
    CalculateAutomationScoreTool, GenerateAutomationRoadmapTool, CALCULATE_AUTOMATION_SCORE,
    GENERATE_AUTOMATION_ROADMAP,
};
pub use intake::{
    GenerateInterviewSummaryTool, LogInterviewProgressTool, LogPermissionGrantedTool,
    RegisterConsentTool, SaveInterviewSummaryTool, TrackClarificationTool,
    TWO_AGENT_INTERVIEW_PHASES, UNIFIED_INTERVIEW_PHASES,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AgencyError, AgencyResult};

/// Output from a tool execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolOutput {
    /// Whether the tool execution was successful
    pub success: bool,
    /// Structured result handed back to the runtime
    pub data: Value,
    /// Human-readable summary of the output
    pub summary: String,
    /// Optional error message if success is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolOutput {
    /// Create a successful output
    pub fn success(data: impl Into<Value>, summary: impl Into<String>) -> Self {
        Self {
            success: true,
            data: data.into(),
            summary: summary.into(),
            error: None,
        }
    }

    /// Create a successful output with string data
    pub fn success_str(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            success: true,
            summary: content.clone(),
            data: Value::String(content),
            error: None,
        }
    }
}

/// A tool call request as issued by the conversation runtime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// Name of the tool to call
    pub name: String,
    /// Arguments for the tool
    pub parameters: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, parameters: Value) -> Self {
        Self { name: name.into(), parameters }
    }
}

/// Declared shape of a tool, as handed to the runtime's function-calling layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Trait for tools that can be invoked by agents
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the unique name of the tool
    fn name(&self) -> String;

    /// Get a description of what the tool does
    fn description(&self) -> String;

    /// Get the JSON schema for the tool's parameters
    fn parameters(&self) -> Value;

    /// Execute the tool with already validated parameters
    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            description: self.description(),
            parameters: self.parameters(),
        }
    }
}

/// Registry of the tools available to one scenario
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }

    /// Register a tool instance
    pub async fn register_instance<T: Tool + 'static>(&self, tool: T) {
        self.register_arc(Arc::new(tool)).await;
    }

    pub async fn register_arc(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().await;
        if tools.insert(tool.name(), tool.clone()).is_some() {
            tracing::warn!("Tool '{}' registered twice; keeping the latest", tool.name());
        }
    }

    /// Get all tool names, sorted
    pub async fn tool_names(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Declared schemas for every tool, sorted by name
    pub async fn definitions(&self) -> Vec<ToolDefinition> {
        let tools = self.tools.read().await;
        let mut defs: Vec<ToolDefinition> = tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Declared schemas for the named tools, in the order given
    pub async fn definitions_for(&self, names: &[String]) -> AgencyResult<Vec<ToolDefinition>> {
        let tools = self.tools.read().await;
        names
            .iter()
            .map(|name| {
                tools
                    .get(name)
                    .map(|t| t.definition())
                    .ok_or_else(|| AgencyError::UnknownTool(name.clone()))
            })
            .collect()
    }

    /// Compact listing of the named tools for a prompt or console
    pub async fn generate_filtered_tools_prompt(&self, allowed_names: &[String]) -> String {
        if allowed_names.is_empty() {
            return "No tools available for this agent.\n".to_string();
        }

        let mut prompt = String::from("Available Tools:\n\n");

        let tools = self.tools.read().await;
        let mut names: Vec<_> = allowed_names.iter().filter(|n| tools.contains_key(*n)).collect();
        names.sort();

        for name in names {
            let tool = &tools[name];
            let parameters = tool.parameters();
            prompt.push_str(&format!(
                "- {}: {} (required: {})\n",
                name,
                tool.description(),
                schema::required_fields(&parameters).join(", ")
            ));
        }

        prompt
    }

    /// Get a specific tool by name
    pub async fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// Validate a call against the tool's declared schema, then execute it
    pub async fn execute(&self, call: &ToolCall) -> AgencyResult<ToolOutput> {
        let tool = self
            .get_tool(&call.name)
            .await
            .ok_or_else(|| AgencyError::UnknownTool(call.name.clone()))?;

        if let Err(e) = schema::validate(&call.name, &tool.parameters(), &call.parameters) {
            tracing::warn!("Rejected call to '{}': {}", call.name, e);
            return Err(e);
        }

        tracing::debug!("Executing tool: {}", call.name);
        tool.execute(call.parameters.clone()).await
    }

    /// Execute multiple independent tool calls concurrently
    pub async fn execute_parallel(&self, calls: &[ToolCall]) -> Vec<AgencyResult<ToolOutput>> {
        let futures = calls.iter().map(|call| self.execute(call));
        futures_util::future::join_all(futures).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
