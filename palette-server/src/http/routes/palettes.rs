//! Palette endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use super::parse_id;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreatedPalette, NewPalette, Palette, RequestSchema};

/// GET /palettes - list all palettes
async fn list_palettes(State(state): State<AppState>) -> Result<Json<Vec<Palette>>, ApiError> {
    let palettes = state.store().list_palettes().await?;
    Ok(Json(palettes))
}

/// POST /palettes - create a palette
async fn create_palette(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<CreatedPalette>), ApiError> {
    let palette = NewPalette::from_body(body)?;
    let id = state.store().create_palette(&palette).await?;
    tracing::debug!(id, project_id = ?palette.project_id, "Created palette");

    Ok((StatusCode::CREATED, Json(palette.into_created(id))))
}

/// DELETE /palettes/{id} - 204 when a row went away, 404 when none matched
async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = match parse_id(&id) {
        Some(palette_id) => state.store().delete_palette(palette_id).await?,
        None => 0,
    };

    if deleted == 0 {
        return Err(ApiError::not_found("palette", id));
    }

    tracing::debug!(id = %id, deleted, "Deleted palette");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /projects/{id}/palettes - palettes filed under a project
///
/// The 404 message names "palette" with the project id; clients match on it.
async fn project_palettes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Palette>>, ApiError> {
    let palettes = match parse_id(&id) {
        Some(project_id) => state.store().project_palettes(project_id).await?,
        None => Vec::new(),
    };

    if palettes.is_empty() {
        return Err(ApiError::not_found("palette", id));
    }

    Ok(Json(palettes))
}

/// Palette routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/palettes", get(list_palettes).post(create_palette))
        .route("/palettes/{id}", delete(delete_palette))
        .route("/projects/{id}/palettes", get(project_palettes))
}
