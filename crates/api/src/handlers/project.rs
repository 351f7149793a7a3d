//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projtrack_core::types::DbId;
use projtrack_db::models::project::{Project, ProjectInput};

use crate::error::AppResult;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list().await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.projects.create(&input).await?;
    tracing::info!(project_id = id, name = %input.name, "Project created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Project created".to_string(),
        }),
    ))
}

/// PUT /api/projects/{id}
///
/// Replaces the whole record. An unknown id is acknowledged like any other
/// update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<MessageResponse>> {
    let updated = state.projects.update(id, &input).await?;
    if !updated {
        tracing::debug!(project_id = id, "Update matched no project");
    }
    Ok(Json(MessageResponse::new("Project updated")))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.projects.delete(id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
    }
    Ok(Json(MessageResponse::new("Project deleted")))
}
