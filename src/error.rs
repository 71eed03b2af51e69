//! Error types for the agency's tool boundary and scenario catalog.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgencyError {
    /// Caller arguments do not match the tool's declared schema.
    #[error("Schema violation in '{tool}': {reason}")]
    SchemaViolation { tool: String, reason: String },

    /// Roadmap requested for a tier outside Low/Mid/Premium.
    #[error("Invalid tier key: '{0}' (expected Low, Mid or Premium)")]
    InvalidTierKey(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// Handoff graph references an undeclared agent or loops onto itself.
    #[error("Invalid handoff graph: {0}")]
    Handoff(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgencyError {
    pub fn schema(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        AgencyError::SchemaViolation {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, used by the HTTP transport.
    pub fn code(&self) -> &'static str {
        match self {
            AgencyError::SchemaViolation { .. } => "SCHEMA_VIOLATION",
            AgencyError::InvalidTierKey(_) => "INVALID_TIER_KEY",
            AgencyError::UnknownTool(_) => "UNKNOWN_TOOL",
            AgencyError::UnknownScenario(_) => "UNKNOWN_SCENARIO",
            AgencyError::Handoff(_) => "INVALID_HANDOFF",
            AgencyError::Config(_) => "CONFIG_ERROR",
            AgencyError::Serialization(_) => "SERIALIZATION_ERROR",
            AgencyError::Io(_) => "IO_ERROR",
        }
    }
}

pub type AgencyResult<T> = std::result::Result<T, AgencyError>;
