//! Project endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::parse_id;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewProject, Project, RequestSchema};

/// GET /projects - list all projects
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store().list_projects().await?;
    Ok(Json(projects))
}

/// POST /projects - create a project
async fn create_project(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = NewProject::from_body(body)?;
    let id = state.store().create_project(&project).await?;
    tracing::debug!(id, "Created project");

    Ok((StatusCode::CREATED, Json(project.into_project(id))))
}

/// GET /projects/{id} - matching rows, always as an array
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = match parse_id(&id) {
        Some(project_id) => state.store().find_project(project_id).await?,
        None => Vec::new(),
    };

    if projects.is_empty() {
        return Err(ApiError::not_found("project", id));
    }

    Ok(Json(projects))
}

/// Project routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project))
}
