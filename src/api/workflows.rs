/// Workflow management REST API endpoints
///
/// CRUD over workflow documents plus the simulated execute trigger. All
/// endpoints share the workflow service through application state and map
/// outcomes onto HTTP status codes; a missing workflow is the only defined
/// error (404, fixed body).

use crate::api::error::ApiError;
use crate::runtime::executor::ExecutionReport;
use crate::workflow::{service::WorkflowService, types::{Workflow, WorkflowPatch}};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Workflow service handling CRUD and simulated execution
    pub service: Arc<WorkflowService>,
}

/// Create workflow management routes
///
/// Sets up the REST API endpoints for workflow CRUD operations and the
/// execute trigger. All endpoints use the shared application state.
pub fn create_workflow_routes() -> Router<AppState> {
    Router::new()
        .route("/api/workflows", get(list_workflows))
        .route("/api/workflows", post(create_workflow))
        .route("/api/workflows/{id}", get(get_workflow))
        .route("/api/workflows/{id}", put(update_workflow))
        .route("/api/workflows/{id}", delete(delete_workflow))
        .route("/api/workflows/{id}/execute", post(execute_workflow))
}

/// List all workflows
///
/// GET /api/workflows
/// Returns: [{ "id": "...", "name": "...", "nodes": [...], ... }]
async fn list_workflows(
    State(state): State<AppState>,
) -> Result<Json<Vec<Workflow>>, ApiError> {
    let workflows = state.service.list_workflows().await?;
    Ok(Json(workflows))
}

/// Get a specific workflow by ID
///
/// GET /api/workflows/:id
async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workflow>, ApiError> {
    let workflow = state.service.get_workflow(&id).await?;
    Ok(Json(workflow))
}

/// Create a new workflow
///
/// POST /api/workflows
/// Body: { "name": "...", "nodes": [...], "connections": [...] } - all optional
async fn create_workflow(
    State(state): State<AppState>,
    Json(input): Json<WorkflowPatch>,
) -> Result<(StatusCode, Json<Workflow>), ApiError> {
    let workflow = state.service.create_workflow(input).await?;
    Ok((StatusCode::CREATED, Json(workflow)))
}

/// Update an existing workflow
///
/// PUT /api/workflows/:id
/// Body: { "name": "...", "nodes": [...], "connections": [...] } - all optional
async fn update_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<WorkflowPatch>,
) -> Result<Json<Workflow>, ApiError> {
    let workflow = state.service.update_workflow(&id, input).await?;
    Ok(Json(workflow))
}

/// Delete a workflow
///
/// DELETE /api/workflows/:id
/// Returns: 204 with no body
async fn delete_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_workflow(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Trigger the simulated execution of a workflow
///
/// POST /api/workflows/:id/execute
/// Returns the execution report with one success entry per node.
async fn execute_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExecutionReport>, ApiError> {
    let report = state.service.execute_workflow(&id).await?;
    Ok(Json(report))
}
