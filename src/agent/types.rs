use serde::{Deserialize, Serialize};
use std::fmt;

/// Voices offered by the realtime speech runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Alloy,
    Ash,
    Ballad,
    Coral,
    Echo,
    #[default]
    Sage,
    Shimmer,
    Verse,
}

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Ash => "ash",
            Voice::Ballad => "ballad",
            Voice::Coral => "coral",
            Voice::Echo => "echo",
            Voice::Sage => "sage",
            Voice::Shimmer => "shimmer",
            Voice::Verse => "verse",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one conversational agent
///
/// Holds only what the runtime needs to instantiate the agent: its voice, the
/// blurb other agents see when deciding to hand off, its instructions and the
/// names of the tools it may call. Handoff edges live on the scenario's graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub name: String,
    pub voice: Voice,
    pub handoff_description: String,
    pub instructions: String,
    pub tools: Vec<String>,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, handoff_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice: Voice::default(),
            handoff_description: handoff_description.into(),
            instructions: String::new(),
            tools: Vec::new(),
        }
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_serialization() {
        assert_eq!(serde_json::to_string(&Voice::Sage).unwrap(), "\"sage\"");
        let v: Voice = serde_json::from_str("\"coral\"").unwrap();
        assert_eq!(v, Voice::Coral);
        assert_eq!(Voice::default().to_string(), "sage");
    }

    #[test]
    fn test_agent_builder() {
        let agent = AgentDefinition::new("ideaAssessment", "Scores ideas")
            .with_instructions("Be precise.")
            .with_tools(["calculateAutomationScore"]);

        assert_eq!(agent.voice, Voice::Sage);
        assert_eq!(agent.tools, vec!["calculateAutomationScore".to_string()]);

        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["handoffDescription"], "Scores ideas");
    }
}
