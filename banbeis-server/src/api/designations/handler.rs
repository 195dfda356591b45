//! Designation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Designation;
use crate::db::repository::DesignationRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

const ENTITY_NAME: &str = "designation";
const BASE_PATH: &str = "/api/designations";

/// GET /api/designations - one page of designations
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Designation>>)> {
    debug!("REST request to get a page of Designations");
    let pageable = page_request.pageable()?;
    let repo = DesignationRepository::new(state.db.clone());
    let total = repo.count().await?;
    let designations = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(designations)))
}

/// GET /api/designations/:id - a single designation
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Designation>> {
    debug!("REST request to get Designation : {}", id);
    let repo = DesignationRepository::new(state.db.clone());
    let designation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Designation {} not found", id)))?;
    Ok(Json(designation))
}

/// POST /api/designations - create a new designation
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Designation>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Designation : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new designation cannot already have an ID",
        ));
    }
    validate_required_text(ENTITY_NAME, &payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.sort_name, "sortName", MAX_NAME_LEN)?;
    let repo = DesignationRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/designations/:id - full replace of an existing designation
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Designation>,
) -> AppResult<Json<Designation>> {
    debug!("REST request to update Designation : {}, {:?}", id, payload);
    require_matching_id::<Designation>(ENTITY_NAME, &id, payload.id.as_ref())?;
    validate_required_text(ENTITY_NAME, &payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.sort_name, "sortName", MAX_NAME_LEN)?;
    let repo = DesignationRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/designations/:id - merge the present fields into an existing designation
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Designation>,
) -> AppResult<Json<Designation>> {
    debug!(
        "REST request to partial update Designation partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Designation>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = DesignationRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/designations/:id - delete a designation (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Designation : {}", id);
    let repo = DesignationRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
