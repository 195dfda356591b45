//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`divisions`] / [`districts`] / [`upazilas`] - geography
//! - [`designations`] / [`employees`] - people
//! - [`centers`] / [`center_employees`] / [`center_images`] - centers
//! - [`navigations`] / [`posts`] / [`post_photos`] / [`post_comments`] - content
//!
//! Every resource exposes the same five-endpoint CRUD surface; the
//! shared plumbing (pagination envelope, id rules) lives here and in
//! [`pagination`].

pub mod pagination;

pub mod health;

// Geography
pub mod districts;
pub mod divisions;
pub mod upazilas;

// People
pub mod designations;
pub mod employees;

// Centers
pub mod center_employees;
pub mod center_images;
pub mod centers;

// Content
pub mod navigations;
pub mod post_comments;
pub mod post_photos;
pub mod posts;

use axum::Router;
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::Model;
use crate::db::repository::record_key;
use crate::utils::{AppError, AppResult};

/// Assemble the full API surface
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(divisions::router())
        .merge(districts::router())
        .merge(upazilas::router())
        .merge(designations::router())
        .merge(employees::router())
        .merge(centers::router())
        .merge(center_employees::router())
        .merge(center_images::router())
        .merge(navigations::router())
        .merge(posts::router())
        .merge(post_photos::router())
        .merge(post_comments::router())
}

/// PUT/PATCH id rules: the body id must be present (`idnull`) and must
/// name the same record as the path (`idinvalid`).
pub(crate) fn require_matching_id<M: Model>(
    entity: &'static str,
    path_id: &str,
    body_id: Option<&RecordId>,
) -> AppResult<()> {
    let Some(body_id) = body_id else {
        return Err(AppError::bad_request(entity, "idnull", "Invalid id"));
    };
    if body_id.key().to_string() != record_key(M::TABLE, path_id) {
        return Err(AppError::bad_request(entity, "idinvalid", "Invalid ID"));
    }
    Ok(())
}

/// Location header value for a freshly created entity
pub(crate) fn entity_location<M: Model>(base_path: &str, entity: &M) -> String {
    match entity.id() {
        Some(id) => format!("{}/{}", base_path, id.key()),
        None => base_path.to_string(),
    }
}
