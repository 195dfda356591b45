//! Upazila API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Upazila;
use crate::db::repository::UpazilaRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "upazila";
const BASE_PATH: &str = "/api/upazilas";

/// GET /api/upazilas - one page of upazilas
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Upazila>>)> {
    debug!("REST request to get a page of Upazilas");
    let pageable = page_request.pageable()?;
    let repo = UpazilaRepository::new(state.db.clone());
    let total = repo.count().await?;
    let upazilas = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(upazilas)))
}

/// GET /api/upazilas/:id - a single upazila
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Upazila>> {
    debug!("REST request to get Upazila : {}", id);
    let repo = UpazilaRepository::new(state.db.clone());
    let upazila = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Upazila {} not found", id)))?;
    Ok(Json(upazila))
}

/// POST /api/upazilas - create a new upazila
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Upazila>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Upazila : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new upazila cannot already have an ID",
        ));
    }
    let repo = UpazilaRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/upazilas/:id - full replace of an existing upazila
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Upazila>,
) -> AppResult<Json<Upazila>> {
    debug!("REST request to update Upazila : {}, {:?}", id, payload);
    require_matching_id::<Upazila>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = UpazilaRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/upazilas/:id - merge the present fields into an existing upazila
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Upazila>,
) -> AppResult<Json<Upazila>> {
    debug!(
        "REST request to partial update Upazila partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Upazila>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = UpazilaRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/upazilas/:id - delete a upazila (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Upazila : {}", id);
    let repo = UpazilaRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
