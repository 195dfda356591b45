//! District API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::District;
use crate::db::repository::DistrictRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "district";
const BASE_PATH: &str = "/api/districts";

/// GET /api/districts - one page of districts
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<District>>)> {
    debug!("REST request to get a page of Districts");
    let pageable = page_request.pageable()?;
    let repo = DistrictRepository::new(state.db.clone());
    let total = repo.count().await?;
    let districts = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(districts)))
}

/// GET /api/districts/:id - a single district
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<District>> {
    debug!("REST request to get District : {}", id);
    let repo = DistrictRepository::new(state.db.clone());
    let district = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("District {} not found", id)))?;
    Ok(Json(district))
}

/// POST /api/districts - create a new district
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<District>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save District : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new district cannot already have an ID",
        ));
    }
    let repo = DistrictRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/districts/:id - full replace of an existing district
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<District>,
) -> AppResult<Json<District>> {
    debug!("REST request to update District : {}, {:?}", id, payload);
    require_matching_id::<District>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = DistrictRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/districts/:id - merge the present fields into an existing district
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<District>,
) -> AppResult<Json<District>> {
    debug!(
        "REST request to partial update District partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<District>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = DistrictRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/districts/:id - delete a district (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete District : {}", id);
    let repo = DistrictRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
