//! HTTP transport for the tool-call boundary.
//!
//! The realtime runtime fetches a session configuration, then forwards each
//! tool call it receives from the model to `POST /scenarios/{key}/tools/{name}`.

use axum::{
    extract::{rejection::JsonRejection, Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::SampleIdea;
use crate::config::AgencyConfig;
use crate::error::{AgencyError, AgencyResult};
use crate::orchestrator::{ScenarioRegistry, ScenarioSummary, SessionConfig, SessionRequest};
use crate::services::RecordSink;
use crate::tools::{ToolCall, ToolDefinition, ToolOutput, ToolRegistry};

struct ApiError(AgencyError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            AgencyError::SchemaViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AgencyError::InvalidTierKey(_) => StatusCode::BAD_REQUEST,
            AgencyError::UnknownTool(_) | AgencyError::UnknownScenario(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        let body = json!({ "error": self.0.to_string(), "code": self.0.code() });
        (status, Json(body)).into_response()
    }
}

impl From<AgencyError> for ApiError {
    fn from(err: AgencyError) -> Self {
        Self(err)
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Clone)]
pub struct AppState {
    pub scenarios: Arc<ScenarioRegistry>,
    tools: Arc<HashMap<String, Arc<ToolRegistry>>>,
}

impl AppState {
    /// Build one tool registry per scenario, all writing to `sink`
    pub async fn new(scenarios: ScenarioRegistry, sink: Arc<dyn RecordSink>) -> AgencyResult<Self> {
        let mut tools = HashMap::new();
        for scenario in scenarios.iter() {
            let registry = scenario.tool_registry(sink.clone()).await?;
            tools.insert(scenario.key().to_string(), Arc::new(registry));
        }

        Ok(Self {
            scenarios: Arc::new(scenarios),
            tools: Arc::new(tools),
        })
    }

    fn tools_for(&self, key: &str) -> AgencyResult<&Arc<ToolRegistry>> {
        self.tools
            .get(key)
            .ok_or_else(|| AgencyError::UnknownScenario(key.to_string()))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/scenarios", get(list_scenarios))
        .route("/session", get(launch_session))
        .route("/samples", get(samples))
        .route("/scenarios/{key}/tools", get(scenario_tools))
        .route("/scenarios/{key}/tools/{name}", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: &AgencyConfig, state: AppState) -> AgencyResult<()> {
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Tool server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_scenarios(State(state): State<AppState>) -> Json<Value> {
    let scenarios: Vec<ScenarioSummary> = state.scenarios.summaries();
    Json(json!({
        "scenarios": scenarios,
        "defaultScenario": state.scenarios.default_key(),
    }))
}

async fn launch_session(
    State(state): State<AppState>,
    Query(request): Query<SessionRequest>,
) -> ApiResult<SessionConfig> {
    let scenario = state.scenarios.resolve_request(&request)?;
    let tools = state.tools_for(scenario.key())?;
    let session = scenario.launch(tools, request.initial_prompt).await?;
    Ok(Json(session))
}

async fn scenario_tools(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Vec<ToolDefinition>> {
    let scenario = state.scenarios.get(&key)?;
    let tools = state.tools_for(scenario.key())?;
    Ok(Json(tools.definitions().await))
}

async fn call_tool(
    State(state): State<AppState>,
    Path((key, name)): Path<(String, String)>,
    arguments: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ToolOutput> {
    let tools = state.tools_for(&key)?;
    let Json(arguments) = arguments.map_err(|rejection| AgencyError::schema(&name, rejection.body_text()))?;
    let output = tools.execute(&ToolCall::new(name, arguments)).await?;
    Ok(Json(output))
}

async fn samples(State(state): State<AppState>) -> Json<Vec<SampleIdea>> {
    let ideas: Vec<SampleIdea> = state.scenarios.iter().flat_map(|s| s.samples().iter().copied()).collect();
    Json(ideas)
}
