//! Navigation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Navigation;
use crate::db::repository::NavigationRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN, validate_required_text};

const ENTITY_NAME: &str = "navigation";
const BASE_PATH: &str = "/api/navigations";

/// GET /api/navigations - one page of navigation entries
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Navigation>>)> {
    debug!("REST request to get a page of Navigations");
    let pageable = page_request.pageable()?;
    let repo = NavigationRepository::new(state.db.clone());
    let total = repo.count().await?;
    let navigations = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(navigations)))
}

/// GET /api/navigations/:id - a single navigation entry
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Navigation>> {
    debug!("REST request to get Navigation : {}", id);
    let repo = NavigationRepository::new(state.db.clone());
    let navigation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Navigation {} not found", id)))?;
    Ok(Json(navigation))
}

/// POST /api/navigations - create a new navigation
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Navigation>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Navigation : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new navigation cannot already have an ID",
        ));
    }
    validate_required_text(ENTITY_NAME, &payload.route, "route", MAX_URL_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.title, "title", MAX_NAME_LEN)?;
    let repo = NavigationRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/navigations/:id - full replace of an existing navigation entry
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Navigation>,
) -> AppResult<Json<Navigation>> {
    debug!("REST request to update Navigation : {}, {:?}", id, payload);
    require_matching_id::<Navigation>(ENTITY_NAME, &id, payload.id.as_ref())?;
    validate_required_text(ENTITY_NAME, &payload.route, "route", MAX_URL_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.title, "title", MAX_NAME_LEN)?;
    let repo = NavigationRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/navigations/:id - merge the present fields into an existing navigation entry
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Navigation>,
) -> AppResult<Json<Navigation>> {
    debug!(
        "REST request to partial update Navigation partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Navigation>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = NavigationRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/navigations/:id - delete a navigation entry (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Navigation : {}", id);
    let repo = NavigationRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
