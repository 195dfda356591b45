//! Center API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Center;
use crate::db::repository::CenterRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "center";
const BASE_PATH: &str = "/api/centers";

/// GET /api/centers - one page of centers
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Center>>)> {
    debug!("REST request to get a page of Centers");
    let pageable = page_request.pageable()?;
    let repo = CenterRepository::new(state.db.clone());
    let total = repo.count().await?;
    let centers = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(centers)))
}

/// GET /api/centers/:id - a single center
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Center>> {
    debug!("REST request to get Center : {}", id);
    let repo = CenterRepository::new(state.db.clone());
    let center = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Center {} not found", id)))?;
    Ok(Json(center))
}

/// POST /api/centers - create a new center
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Center>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Center : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new center cannot already have an ID",
        ));
    }
    let repo = CenterRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/centers/:id - full replace of an existing center
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Center>,
) -> AppResult<Json<Center>> {
    debug!("REST request to update Center : {}, {:?}", id, payload);
    require_matching_id::<Center>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = CenterRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/centers/:id - merge the present fields into an existing center
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Center>,
) -> AppResult<Json<Center>> {
    debug!(
        "REST request to partial update Center partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Center>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = CenterRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/centers/:id - delete a center (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Center : {}", id);
    let repo = CenterRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
