//! PostComment API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::PostComment;
use crate::db::repository::PostCommentRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "postComment";
const BASE_PATH: &str = "/api/post-comments";

/// GET /api/post-comments - one page of post comments
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<PostComment>>)> {
    debug!("REST request to get a page of PostComments");
    let pageable = page_request.pageable()?;
    let repo = PostCommentRepository::new(state.db.clone());
    let total = repo.count().await?;
    let post_comments = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(post_comments)))
}

/// GET /api/post-comments/:id - a single post comment
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PostComment>> {
    debug!("REST request to get PostComment : {}", id);
    let repo = PostCommentRepository::new(state.db.clone());
    let post_comment = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("PostComment {} not found", id)))?;
    Ok(Json(post_comment))
}

/// POST /api/post-comments - create a new postComment
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PostComment>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save PostComment : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new postComment cannot already have an ID",
        ));
    }
    let repo = PostCommentRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/post-comments/:id - full replace of an existing post comment
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PostComment>,
) -> AppResult<Json<PostComment>> {
    debug!("REST request to update PostComment : {}, {:?}", id, payload);
    require_matching_id::<PostComment>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostCommentRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/post-comments/:id - merge the present fields into an existing post comment
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PostComment>,
) -> AppResult<Json<PostComment>> {
    debug!(
        "REST request to partial update PostComment partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<PostComment>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostCommentRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/post-comments/:id - delete a post comment (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete PostComment : {}", id);
    let repo = PostCommentRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
