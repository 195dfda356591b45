//! Division API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Division;
use crate::db::repository::DivisionRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "division";
const BASE_PATH: &str = "/api/divisions";

/// GET /api/divisions - one page of divisions
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Division>>)> {
    debug!("REST request to get a page of Divisions");
    let pageable = page_request.pageable()?;
    let repo = DivisionRepository::new(state.db.clone());
    let total = repo.count().await?;
    let divisions = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(divisions)))
}

/// GET /api/divisions/:id - a single division
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Division>> {
    debug!("REST request to get Division : {}", id);
    let repo = DivisionRepository::new(state.db.clone());
    let division = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Division {} not found", id)))?;
    Ok(Json(division))
}

/// POST /api/divisions - create a new division
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Division>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Division : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new division cannot already have an ID",
        ));
    }
    let repo = DivisionRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/divisions/:id - full replace of an existing division
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Division>,
) -> AppResult<Json<Division>> {
    debug!("REST request to update Division : {}, {:?}", id, payload);
    require_matching_id::<Division>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = DivisionRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/divisions/:id - merge the present fields into an existing division
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Division>,
) -> AppResult<Json<Division>> {
    debug!(
        "REST request to partial update Division partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Division>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = DivisionRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/divisions/:id - delete a division (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Division : {}", id);
    let repo = DivisionRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
