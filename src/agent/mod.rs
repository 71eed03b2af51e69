//! Agent Module
//!
//! Static agent definitions for the realtime scenarios: voices, instructions
//! and the tool names each agent may call.

mod types;
pub mod prompts;
pub mod samples;

pub use samples::{sample_idea, SampleIdea, SAMPLE_IDEAS};
pub use types::{AgentDefinition, Voice};
