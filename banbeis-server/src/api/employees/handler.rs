//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use tracing::debug;

use crate::api::pagination::{PageRequest, pagination_headers};
use crate::api::{entity_location, require_matching_id};
use crate::core::ServerState;
use crate::db::models::Employee;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

const ENTITY_NAME: &str = "employee";
const BASE_PATH: &str = "/api/employees";

/// GET /api/employees - one page of employees
pub async fn list(
    State(state): State<ServerState>,
    Query(page_request): Query<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<Employee>>)> {
    debug!("REST request to get a page of Employees");
    let pageable = page_request.pageable()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let total = repo.count().await?;
    let employees = repo.find_paged(&pageable).await?;
    let headers = pagination_headers(BASE_PATH, &page_request, total)?;
    Ok((headers, Json(employees)))
}

/// GET /api/employees/:id - a single employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    debug!("REST request to get Employee : {}", id);
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// POST /api/employees - create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Employee>,
) -> AppResult<impl axum::response::IntoResponse> {
    debug!("REST request to save Employee : {:?}", payload);
    if payload.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new employee cannot already have an ID",
        ));
    }
    validate_required_text(ENTITY_NAME, &payload.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.bn_full_name, "bnFullName", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.email, "email", MAX_EMAIL_LEN)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    let location = entity_location(BASE_PATH, &result);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(result),
    ))
}

/// PUT /api/employees/:id - full replace of an existing employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    debug!("REST request to update Employee : {}, {:?}", id, payload);
    require_matching_id::<Employee>(ENTITY_NAME, &id, payload.id.as_ref())?;
    validate_required_text(ENTITY_NAME, &payload.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.bn_full_name, "bnFullName", MAX_NAME_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(ENTITY_NAME, &payload.email, "email", MAX_EMAIL_LEN)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let result = repo
        .replace(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// PATCH /api/employees/:id - merge the present fields into an existing employee
pub async fn partial_update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    debug!(
        "REST request to partial update Employee partially : {}, {:?}",
        id, payload
    );
    require_matching_id::<Employee>(ENTITY_NAME, &id, payload.id.as_ref())?;
    let repo = EmployeeRepository::new(state.db.clone());
    let result = repo
        .merge(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found_alert(ENTITY_NAME, "idnotfound", "Entity not found"))?;
    Ok(Json(result))
}

/// DELETE /api/employees/:id - delete a employee (no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    debug!("REST request to delete Employee : {}", id);
    let repo = EmployeeRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
