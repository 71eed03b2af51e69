//! Services Module
//!
//! Capabilities injected into tools from outside the pure core.

pub mod records;

pub use records::{MemorySink, RecordSink, TeeSink, ToolRecord, TracingSink};
