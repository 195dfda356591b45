//! CenterEmployee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::CenterEmployee;
use crate::db::repository::CenterEmployeeRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "centerEmployee";
const BASE_PATH: &str = "/api/center-employees";

/// GET /api/center-employees - one page of center employee postings
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<CenterEmployee>>)> {
    debug!("REST request to get a page of CenterEmployees");
    let pageable = page_request.pageable()?;
    let repo = CenterEmployeeRepository::new(state.db.clone());
    let total = repo.count().await?;
    let center_employees = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(center_employees)))
}

/// GET /api/center-employees/:id - a single center employee posting
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CenterEmployee>> {
    debug!("REST request to get CenterEmployee : {}", id);
    let repo = CenterEmployeeRepository::new(state.db.clone());
    let center_employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("CenterEmployee {} not found", id)))?;
    Ok(Json(center_employee))
}

/// POST /api/center-employees - create a new centerEmployee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CenterEmployee>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save CenterEmployee : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new centerEmployee cannot already have an ID",
        ));
    }
    let repo = CenterEmployeeRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/center-employees/:id - full replace of an existing center employee posting
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CenterEmployee>,
) -> AppResult<Json<CenterEmployee>> {
    debug!("REST request to update CenterEmployee : {}, {:?}", id, payload);
    require_matching_id::<CenterEmployee>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = CenterEmployeeRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/center-employees/:id - merge the present fields into an existing center employee posting
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CenterEmployee>,
) -> AppResult<Json<CenterEmployee>> {
    debug!(
        "REST request to partial update CenterEmployee partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<CenterEmployee>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = CenterEmployeeRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/center-employees/:id - delete a center employee posting (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete CenterEmployee : {}", id);
    let repo = CenterEmployeeRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
