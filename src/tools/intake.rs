//! Patient intake tools.
//!
//! Consent, progress and summary loggers for the intake scenarios. None of them
//! persist anything: each builds a structured record and hands it to the
//! injected [`RecordSink`], then answers with a human-readable confirmation.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::{Tool, ToolOutput};
use crate::error::{AgencyError, AgencyResult};
use crate::services::{RecordSink, ToolRecord};

/// Interview phases of the single-agent intake
pub const UNIFIED_INTERVIEW_PHASES: &[&str] = &[
    "PERMISSION_REQUEST",
    "BASIC_INFO",
    "DETAILED_ASSESSMENT",
    "WRAP_UP",
    "COMPLETED",
];

/// Interview phases of the permission/interview agent pair
pub const TWO_AGENT_INTERVIEW_PHASES: &[&str] =
    &["PHASE1_BASICS", "PHASE2_DIAGNOSTICS", "PHASE3_WRAPUP", "COMPLETED"];

const CLARIFICATION_TYPES: &[&str] = &[
    "LOCATION",
    "TIMING",
    "PAIN_DESCRIPTION",
    "SEVERITY",
    "SYMPTOMS",
    "HISTORY",
    "OTHER",
];

const RESOLUTION_STATUSES: &[&str] = &["CLARIFIED", "STILL_VAGUE", "PATIENT_UNABLE"];

const FOCUS_AREAS: &[&str] = &[
    "PRESENTING_COMPLAINT",
    "SYMPTOMS",
    "MEDICAL_HISTORY",
    "FAMILY_HISTORY",
    "MEDICATIONS",
    "LIFESTYLE",
    "CONCERNS",
];

const SUMMARY_INSTRUCTION: &str = "Please provide a detailed, structured summary of this interview including: \
1) Patient's main presenting complaint, 2) Key symptoms and their characteristics, 3) Relevant medical history, \
4) Family history if mentioned, 5) Current medications and allergies, 6) Patient's main concerns and questions, \
7) Recommendations for next steps. Format this as a professional medical summary suitable for doctor review.";

fn parse<T: for<'de> Deserialize<'de>>(tool: &str, params: Value) -> AgencyResult<T> {
    serde_json::from_value(params).map_err(|e| AgencyError::schema(tool, e.to_string()))
}

fn to_fields<T: Serialize>(value: &T) -> AgencyResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            Ok(map)
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// register_consent
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsentParams {
    granted: bool,
    #[serde(default)]
    patient_id: String,
    #[serde(default = "default_consent_type")]
    consent_type: String,
    #[serde(default = "default_legal_basis")]
    legal_basis: String,
    #[serde(default)]
    notes: String,
}

fn default_consent_type() -> String {
    "intake_interview".to_string()
}

fn default_legal_basis() -> String {
    "explicit_consent".to_string()
}

#[derive(Debug, Serialize)]
struct ConsentRecord {
    patient_id: String,
    consent_type: String,
    legal_basis: String,
    granted: bool,
    granted_at: Option<String>,
    denied_at: Option<String>,
    notes: String,
    created_at: String,
}

/// Records whether the patient granted or denied consent
pub struct RegisterConsentTool {
    sink: Arc<dyn RecordSink>,
}

impl RegisterConsentTool {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Tool for RegisterConsentTool {
    fn name(&self) -> String {
        "register_consent".to_string()
    }

    fn description(&self) -> String {
        "Register patient consent status (granted or denied) for the intake interview in the database. \
         Call this when the patient grants or denies permission to proceed."
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "patient_id": { "type": "string", "description": "Patient identifier (optional, can be generated if not provided)" },
                "consent_type": { "type": "string", "description": "Type of consent (default: 'intake_interview')" },
                "legal_basis": { "type": "string", "description": "Legal basis for consent (default: 'explicit_consent')" },
                "granted": { "type": "boolean", "description": "Whether consent was granted (True) or denied (False)" },
                "notes": { "type": "string", "description": "Additional notes about the consent process" }
            },
            "required": ["granted"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: ConsentParams = parse("register_consent", params)?;
        let now = Utc::now();
        let timestamp = now.to_rfc3339();

        let patient_id = if params.patient_id.is_empty() {
            "auto_generated".to_string()
        } else {
            params.patient_id
        };

        let record = ConsentRecord {
            patient_id: patient_id.clone(),
            consent_type: params.consent_type.clone(),
            legal_basis: params.legal_basis,
            granted: params.granted,
            granted_at: params.granted.then(|| timestamp.clone()),
            denied_at: (!params.granted).then(|| timestamp.clone()),
            notes: params.notes,
            created_at: timestamp.clone(),
        };
        self.sink.record(ToolRecord::new("consent", to_fields(&record)?, now));

        let status = if params.granted { "granted" } else { "denied" };
        Ok(ToolOutput::success_str(format!(
            "Consent status recorded ({}) for {} at {}. Patient ID: {}",
            status, params.consent_type, timestamp, patient_id
        )))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// log_permission_granted
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PermissionParams {
    patient_consent: String,
    consent_timestamp: String,
    #[serde(default)]
    notes: String,
}

/// Logs the outcome of the permission request (granted, denied or deferred)
pub struct LogPermissionGrantedTool {
    sink: Arc<dyn RecordSink>,
}

impl LogPermissionGrantedTool {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Tool for LogPermissionGrantedTool {
    fn name(&self) -> String {
        "log_permission_granted".to_string()
    }

    fn description(&self) -> String {
        "Log that the patient has granted permission for the intake interview. \
         Should be run when the patient consents to proceed."
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "patient_consent": {
                    "type": "string",
                    "enum": ["GRANTED", "DENIED", "DEFERRED"],
                    "description": "The patient's consent status for the intake interview"
                },
                "consent_timestamp": { "type": "string", "description": "Timestamp when consent was given or denied" },
                "notes": { "type": "string", "description": "Any additional notes about the consent process" }
            },
            "required": ["patient_consent", "consent_timestamp"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: PermissionParams = parse("log_permission_granted", params)?;
        self.sink
            .record(ToolRecord::new("permission", to_fields(&params)?, Utc::now()));

        Ok(ToolOutput::success(
            json!({ "success": true }),
            format!("Permission {} logged at {}", params.patient_consent, params.consent_timestamp),
        ))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// log_interview_progress
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct ProgressParams {
    phase: String,
    #[serde(default)]
    presenting_complaint: String,
    #[serde(default)]
    symptom_severity: String,
    #[serde(default)]
    key_findings: String,
    #[serde(default)]
    notes: String,
}

/// Logs completion of an interview phase; the phase set depends on the scenario
pub struct LogInterviewProgressTool {
    sink: Arc<dyn RecordSink>,
    phases: &'static [&'static str],
}

impl LogInterviewProgressTool {
    pub fn new(sink: Arc<dyn RecordSink>, phases: &'static [&'static str]) -> Self {
        Self { sink, phases }
    }
}

#[async_trait]
impl Tool for LogInterviewProgressTool {
    fn name(&self) -> String {
        "log_interview_progress".to_string()
    }

    fn description(&self) -> String {
        "Log the progress of the intake interview, including which phase is completed and key information gathered."
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "phase": { "type": "string", "enum": self.phases, "description": "The current phase of the interview" },
                "presenting_complaint": { "type": "string", "description": "The patient's main presenting complaint" },
                "symptom_severity": { "type": "string", "description": "Patient's reported symptom severity (1-10 scale)" },
                "key_findings": { "type": "string", "description": "Key medical findings or concerns identified" },
                "notes": { "type": "string", "description": "Additional notes or observations" }
            },
            "required": ["phase"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: ProgressParams = parse("log_interview_progress", params)?;
        self.sink
            .record(ToolRecord::new("interview_progress", to_fields(&params)?, Utc::now()));

        Ok(ToolOutput::success_str(format!(
            "Interview progress logged: Phase {}. Complaint: {}. Severity: {}. Findings: {}. Notes: {}",
            params.phase, params.presenting_complaint, params.symptom_severity, params.key_findings, params.notes
        )))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// save_interview_summary
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct SummaryParams {
    interview_date: String,
    presenting_complaint: String,
    summary: String,
    #[serde(default)]
    patient_id: String,
    #[serde(default)]
    medical_history: String,
    #[serde(default)]
    symptoms: String,
    #[serde(default)]
    family_history: String,
}

/// Files the final interview summary for doctor review
pub struct SaveInterviewSummaryTool {
    sink: Arc<dyn RecordSink>,
}

impl SaveInterviewSummaryTool {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Tool for SaveInterviewSummaryTool {
    fn name(&self) -> String {
        "save_interview_summary".to_string()
    }

    fn description(&self) -> String {
        "Save the complete interview summary for the patient's medical record and doctor review.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "interview_date": { "type": "string", "description": "Date of the interview" },
                "presenting_complaint": { "type": "string", "description": "Main presenting complaint" },
                "summary": { "type": "string", "description": "Complete interview summary" },
                "patient_id": { "type": "string", "description": "Patient identifier" },
                "medical_history": { "type": "string", "description": "Relevant medical history" },
                "symptoms": { "type": "string", "description": "Detailed symptom description" },
                "family_history": { "type": "string", "description": "Relevant family medical history" }
            },
            "required": ["interview_date", "presenting_complaint", "summary"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: SummaryParams = parse("save_interview_summary", params)?;
        self.sink
            .record(ToolRecord::new("interview_summary", to_fields(&params)?, Utc::now()));

        Ok(ToolOutput::success_str(format!(
            "Interview summary saved for patient {} on {}. Complaint: {}",
            params.patient_id, params.interview_date, params.presenting_complaint
        )))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// track_clarification_needed
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct ClarificationParams {
    vague_response: String,
    clarification_type: String,
    #[serde(default)]
    follow_up_questions: Vec<String>,
    #[serde(default = "default_resolution")]
    resolution_status: String,
    #[serde(default)]
    notes: String,
}

fn default_resolution() -> String {
    "CLARIFIED".to_string()
}

/// Tracks vague patient answers and the follow-ups used to clarify them
pub struct TrackClarificationTool {
    sink: Arc<dyn RecordSink>,
}

impl TrackClarificationTool {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Tool for TrackClarificationTool {
    fn name(&self) -> String {
        "track_clarification_needed".to_string()
    }

    fn description(&self) -> String {
        "Track when patient responses are vague or unclear and need follow-up questions for better understanding."
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "vague_response": { "type": "string", "description": "The vague or unclear response from the patient" },
                "clarification_type": { "type": "string", "enum": CLARIFICATION_TYPES, "description": "Type of clarification needed" },
                "follow_up_questions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Follow-up questions asked to clarify the vague response"
                },
                "resolution_status": { "type": "string", "enum": RESOLUTION_STATUSES, "description": "Whether the clarification was successful" },
                "notes": { "type": "string", "description": "Additional notes about the clarification process" }
            },
            "required": ["vague_response", "clarification_type"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: ClarificationParams = parse("track_clarification_needed", params)?;
        self.sink
            .record(ToolRecord::new("clarification", to_fields(&params)?, Utc::now()));

        Ok(ToolOutput::success_str(format!(
            "Clarification tracked: {} - {}. Follow-ups: {} questions asked.",
            params.clarification_type,
            params.resolution_status,
            params.follow_up_questions.len()
        )))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// generate_interview_summary
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GenerateSummaryParams {
    summary_type: String,
    #[serde(default)]
    include_timestamps: bool,
    #[serde(default)]
    focus_areas: Vec<String>,
}

/// Hands the agent its summarisation instructions. Writes no record.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateInterviewSummaryTool;

#[async_trait]
impl Tool for GenerateInterviewSummaryTool {
    fn name(&self) -> String {
        "generate_interview_summary".to_string()
    }

    fn description(&self) -> String {
        "Generate a comprehensive, structured summary of the interview conversation for medical review. \
         This should include key medical information, patient concerns, and a professional summary suitable for doctor review."
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "summary_type": {
                    "type": "string",
                    "enum": ["MEDICAL", "CONVERSATION", "BOTH"],
                    "description": "Type of summary to generate - MEDICAL focuses on medical findings, CONVERSATION covers the full dialogue, BOTH provides comprehensive coverage"
                },
                "include_timestamps": { "type": "boolean", "description": "Whether to include timestamps in the summary" },
                "focus_areas": {
                    "type": "array",
                    "items": { "type": "string", "enum": FOCUS_AREAS },
                    "description": "Specific areas to focus on in the summary"
                }
            },
            "required": ["summary_type"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> AgencyResult<ToolOutput> {
        let params: GenerateSummaryParams = parse("generate_interview_summary", params)?;

        Ok(ToolOutput::success(
            json!({
                "success": true,
                "message": "Interview summary generation requested. The agent will now provide a comprehensive summary of the conversation.",
                "instruction": SUMMARY_INSTRUCTION,
            }),
            format!(
                "Interview summary generation requested. Type: {}. Focus areas: {}. Timestamps: {}",
                params.summary_type,
                params.focus_areas.join(", "),
                params.include_timestamps
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySink;

    #[tokio::test]
    async fn test_register_consent_defaults() {
        let sink = Arc::new(MemorySink::new());
        let tool = RegisterConsentTool::new(sink.clone());

        let output = tool.execute(json!({ "granted": true })).await.unwrap();
        assert!(output.summary.starts_with("Consent status recorded (granted) for intake_interview at "));
        assert!(output.summary.ends_with("Patient ID: auto_generated"));

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "consent");
        assert_eq!(records[0].fields["legal_basis"], "explicit_consent");
        assert!(records[0].fields["granted_at"].is_string());
        assert!(records[0].fields["denied_at"].is_null());
    }

    #[tokio::test]
    async fn test_denied_consent() {
        let sink = Arc::new(MemorySink::new());
        let tool = RegisterConsentTool::new(sink.clone());
        let output = tool
            .execute(json!({ "granted": false, "patient_id": "p-17" }))
            .await
            .unwrap();
        assert!(output.summary.contains("(denied)"));
        assert!(output.summary.ends_with("Patient ID: p-17"));
        assert!(sink.records()[0].fields["denied_at"].is_string());
    }

    #[tokio::test]
    async fn test_progress_phase_set_per_scenario() {
        let sink = Arc::new(MemorySink::new());
        let unified = LogInterviewProgressTool::new(sink.clone(), UNIFIED_INTERVIEW_PHASES);
        let paired = LogInterviewProgressTool::new(sink.clone(), TWO_AGENT_INTERVIEW_PHASES);

        assert_eq!(unified.parameters()["properties"]["phase"]["enum"][1], "BASIC_INFO");
        assert_eq!(paired.parameters()["properties"]["phase"]["enum"][0], "PHASE1_BASICS");

        let output = paired
            .execute(json!({ "phase": "PHASE1_BASICS", "presenting_complaint": "Hodepine" }))
            .await
            .unwrap();
        assert_eq!(
            output.summary,
            "Interview progress logged: Phase PHASE1_BASICS. Complaint: Hodepine. Severity: . Findings: . Notes: "
        );
        assert_eq!(sink.records()[0].fields["phase"], "PHASE1_BASICS");
    }

    #[tokio::test]
    async fn test_clarification_defaults() {
        let sink = Arc::new(MemorySink::new());
        let tool = TrackClarificationTool::new(sink.clone());
        let output = tool
            .execute(json!({
                "vague_response": "Det gjør vondt et sted",
                "clarification_type": "LOCATION",
                "follow_up_questions": ["Kan du peke mer spesifikt?", "Er det på høyre eller venstre side?"]
            }))
            .await
            .unwrap();
        assert_eq!(output.summary, "Clarification tracked: LOCATION - CLARIFIED. Follow-ups: 2 questions asked.");
    }

    #[tokio::test]
    async fn test_generate_summary_writes_nothing() {
        let output = GenerateInterviewSummaryTool
            .execute(json!({ "summary_type": "BOTH", "focus_areas": ["SYMPTOMS", "CONCERNS"] }))
            .await
            .unwrap();
        assert_eq!(
            output.summary,
            "Interview summary generation requested. Type: BOTH. Focus areas: SYMPTOMS, CONCERNS. Timestamps: false"
        );
        assert!(output.data["instruction"].as_str().unwrap().contains("doctor review"));
    }

    #[tokio::test]
    async fn test_save_summary_and_permission() {
        let sink = Arc::new(MemorySink::new());
        SaveInterviewSummaryTool::new(sink.clone())
            .execute(json!({
                "interview_date": "2026-10-19",
                "presenting_complaint": "Ryggsmerter",
                "summary": "Smerter i korsryggen i to uker"
            }))
            .await
            .unwrap();
        LogPermissionGrantedTool::new(sink.clone())
            .execute(json!({ "patient_consent": "DEFERRED", "consent_timestamp": "2026-10-19T09:00:00Z" }))
            .await
            .unwrap();

        let kinds: Vec<_> = sink.records().into_iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec!["interview_summary", "permission"]);
    }
}
