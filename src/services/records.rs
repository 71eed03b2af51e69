//! Record sink for consent and interview logs.
//!
//! Intake tools hand their structured records to a `RecordSink` instead of
//! persisting anything themselves, so a real store can be swapped in without
//! touching tool logic. Delivery is best-effort: `record` has no return value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Structured record emitted by a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: Uuid,
    /// What was recorded, e.g. `consent` or `interview_progress`
    pub kind: String,
    pub fields: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl ToolRecord {
    pub fn new(kind: impl Into<String>, fields: Map<String, Value>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            fields,
            timestamp,
        }
    }
}

/// Write-only destination for tool records
pub trait RecordSink: Send + Sync {
    fn record(&self, record: ToolRecord);
}

/// Logs every record through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn record(&self, record: ToolRecord) {
        let fields = serde_json::to_string_pretty(&record.fields).unwrap_or_default();
        info!(
            record_id = %record.id,
            kind = %record.kind,
            timestamp = %record.timestamp.to_rfc3339(),
            "Record logged: {}",
            fields
        );
    }
}

/// Keeps records in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<ToolRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ToolRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn record(&self, record: ToolRecord) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(record);
    }
}

/// Fans records out to several sinks
pub struct TeeSink {
    sinks: Vec<std::sync::Arc<dyn RecordSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<std::sync::Arc<dyn RecordSink>>) -> Self {
        Self { sinks }
    }
}

impl RecordSink for TeeSink {
    fn record(&self, record: ToolRecord) {
        for sink in &self.sinks {
            sink.record(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn record(kind: &str) -> ToolRecord {
        let mut fields = Map::new();
        fields.insert("phase".to_string(), json!("BASIC_INFO"));
        ToolRecord::new(kind, fields, Utc::now())
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.record(record("consent"));
        sink.record(record("interview_progress"));

        let kinds: Vec<_> = sink.records().into_iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec!["consent", "interview_progress"]);
    }

    #[test]
    fn test_tee_sink_fans_out() {
        let a = Arc::new(MemorySink::new());
        let b = Arc::new(MemorySink::new());
        let tee = TeeSink::new(vec![a.clone(), b.clone(), Arc::new(TracingSink)]);
        tee.record(record("consent"));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a.records()[0].id, b.records()[0].id);
    }
}
