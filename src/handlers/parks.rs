//! Park CRUD handlers: list, show, create, update, delete.

use crate::error::AppError;
use crate::model::Park;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid uuid".into()))
}

async fn find_or_404(state: &AppState, id_str: &str) -> Result<Park, AppError> {
    let id = parse_id(id_str)?;
    state
        .parks
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str.to_string()))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Park>>, AppError> {
    let parks = state.parks.list().await?;
    Ok(Json(parks))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Park>, AppError> {
    let park = find_or_404(&state, &id_str).await?;
    Ok(Json(park))
}

/// Any `id` in the body is ignored; the store assigns one.
pub async fn create(
    State(state): State<AppState>,
    Json(mut body): Json<Park>,
) -> Result<(StatusCode, Json<Park>), AppError> {
    body.id = None;
    let park = state.parks.save(body).await?;
    tracing::info!(id = ?park.id, name = %park.name, "park created");
    Ok((StatusCode::CREATED, Json(park)))
}

/// Full overwrite of name and coordinates; the id never changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Park>,
) -> Result<StatusCode, AppError> {
    let mut park = find_or_404(&state, &id_str).await?;
    park.overwrite_from(body);
    state.parks.save(park).await?;
    tracing::info!(id = %id_str, "park updated");
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let park = find_or_404(&state, &id_str).await?;
    if !state.parks.delete(&park).await? {
        return Err(AppError::NotFound(id_str));
    }
    tracing::info!(id = %id_str, "park deleted");
    Ok(StatusCode::OK)
}
