//! Project routes. Every handler requires a bearer token.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::{HeaderMap, StatusCode, header},
};
use core_types::{Project, ProjectId};
use web_types::{NewProject, ProjectListQuery, ProjectUpdate};

use crate::error::ApiResult;
use crate::state::AppState;

async fn authorize(state: &AppState, headers: &HeaderMap) -> ApiResult<String> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    state.authorize(authorization).await
}

/// GET /projects - List projects with optional skip/limit.
pub async fn list_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ProjectListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Project>>> {
    authorize(&state, &headers).await?;
    let Query(query) = query?;
    Ok(Json(state.list(query).await))
}

/// POST /projects - Create a project.
pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let user = authorize(&state, &headers).await?;
    let Json(input) = body?;
    let project = state.create(input).await?;

    tracing::info!(%user, id = project.id, name = %project.name, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/:id - Get one project.
pub async fn get_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<ProjectId>,
) -> ApiResult<Json<Project>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.get(id).await?))
}

/// PUT /projects/:id - Apply the given fields and advance to the next phase.
pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<ProjectId>,
    body: Result<Json<ProjectUpdate>, JsonRejection>,
) -> ApiResult<Json<Project>> {
    let user = authorize(&state, &headers).await?;
    let Json(changes) = body?;
    let feedback = changes.feedback.clone().unwrap_or_default();
    let project = state.update(id, changes).await?;

    tracing::info!(%user, id, phase = %project.phase_text(), %feedback, "project advanced");
    Ok(Json(project))
}

/// DELETE /projects/:id - Delete a project.
pub async fn delete_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<ProjectId>,
) -> ApiResult<StatusCode> {
    let user = authorize(&state, &headers).await?;
    state.delete(id).await?;

    tracing::info!(%user, id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
