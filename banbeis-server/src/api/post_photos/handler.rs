//! PostPhoto API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::PostPhoto;
use crate::db::repository::PostPhotoRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "postPhoto";
const BASE_PATH: &str = "/api/post-photos";

/// GET /api/post-photos - one page of post photos
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<PostPhoto>>)> {
    debug!("REST request to get a page of PostPhotos");
    let pageable = page_request.pageable()?;
    let repo = PostPhotoRepository::new(state.db.clone());
    let total = repo.count().await?;
    let post_photos = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(post_photos)))
}

/// GET /api/post-photos/:id - a single post photo
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PostPhoto>> {
    debug!("REST request to get PostPhoto : {}", id);
    let repo = PostPhotoRepository::new(state.db.clone());
    let post_photo = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("PostPhoto {} not found", id)))?;
    Ok(Json(post_photo))
}

/// POST /api/post-photos - create a new postPhoto
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PostPhoto>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save PostPhoto : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new postPhoto cannot already have an ID",
        ));
    }
    let repo = PostPhotoRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/post-photos/:id - full replace of an existing post photo
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PostPhoto>,
) -> AppResult<Json<PostPhoto>> {
    debug!("REST request to update PostPhoto : {}, {:?}", id, payload);
    require_matching_id::<PostPhoto>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostPhotoRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/post-photos/:id - merge the present fields into an existing post photo
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PostPhoto>,
) -> AppResult<Json<PostPhoto>> {
    debug!(
        "REST request to partial update PostPhoto partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<PostPhoto>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostPhotoRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/post-photos/:id - delete a post photo (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete PostPhoto : {}", id);
    let repo = PostPhotoRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
