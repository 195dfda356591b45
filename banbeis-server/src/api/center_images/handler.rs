//! CenterImages API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::CenterImages;
use crate::db::repository::CenterImagesRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

const ENTITY_NAME: &str = "centerImages";
const BASE_PATH: &str = "/api/center-images";

/// GET /api/center-images - one page of center images
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<CenterImages>>)> {
    debug!("REST request to get a page of CenterImages");
    let pageable = page_request.pageable()?;
    let repo = CenterImagesRepository::new(state.db.clone());
    let total = repo.count().await?;
    let center_images = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(center_images)))
}

/// GET /api/center-images/:id - a single center image
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CenterImages>> {
    debug!("REST request to get CenterImages : {}", id);
    let repo = CenterImagesRepository::new(state.db.clone());
    let center_image = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("CenterImages {} not found", id)))?;
    Ok(Json(center_image))
}

/// POST /api/center-images - create a new centerImages
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CenterImages>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save CenterImages : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new centerImages cannot already have an ID",
        ));
    }
    validate_required_text(ENTITY_NAME, &payload.title, "title", MAX_NAME_LEN)?;
    let repo = CenterImagesRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/center-images/:id - full replace of an existing center image
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CenterImages>,
) -> AppResult<Json<CenterImages>> {
    debug!("REST request to update CenterImages : {}, {:?}", id, payload);
    require_matching_id::<CenterImages>(ENTITY_NAME, &id, payload.id.as_ref())?;
    validate_required_text(ENTITY_NAME, &payload.title, "title", MAX_NAME_LEN)?;
    let repo = CenterImagesRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/center-images/:id - merge the present fields into an existing center image
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CenterImages>,
) -> AppResult<Json<CenterImages>> {
    debug!(
        "REST request to partial update CenterImages partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<CenterImages>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = CenterImagesRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/center-images/:id - delete a center image (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete CenterImages : {}", id);
    let repo = CenterImagesRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
