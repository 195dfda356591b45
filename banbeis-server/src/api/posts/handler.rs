//! Post API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Post;
use crate::db::repository::PostRepository;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "post";
const BASE_PATH: &str = "/api/posts";

/// GET /api/posts - one page of posts
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Post>>)> {
    debug!("REST request to get a page of Posts");
    let pageable = page_request.pageable()?;
    let repo = PostRepository::new(state.db.clone());
    let total = repo.count().await?;
    let posts = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(posts)))
}

/// GET /api/posts/:id - a single post
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Post>> {
    debug!("REST request to get Post : {}", id);
    let repo = PostRepository::new(state.db.clone());
    let post = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Post {} not found", id)))?;
    Ok(Json(post))
}

/// POST /api/posts - create a new post
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Post>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Post : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new post cannot already have an ID",
        ));
    }
    let repo = PostRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/posts/:id - full replace of an existing post
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Post>,
) -> AppResult<Json<Post>> {
    debug!("REST request to update Post : {}, {:?}", id, payload);
    require_matching_id::<Post>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/posts/:id - merge the present fields into an existing post
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Post>,
) -> AppResult<Json<Post>> {
    debug!(
        "REST request to partial update Post partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Post>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = PostRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/posts/:id - delete a post (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Post : {}", id);
    let repo = PostRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
