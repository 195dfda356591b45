//! Unified error handling
//!
//! Provides the application-level error type returned by every HTTP
//! handler, plus the JSON error body clients dispatch on.
//!
//! # Error body
//!
//! ```json
//! {
//!   "error": "bad_request",
//!   "message": "A new designation cannot already have an ID",
//!   "entityName": "designation",
//!   "errorKey": "idexists"
//! }
//! ```
//!
//! The `entityName`/`errorKey` pair is only present on alert-style
//! client errors (id rules, required fields) so API consumers can
//! handle them programmatically instead of parsing messages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
///
/// | Category | Variants | Status |
/// |----------|----------|--------|
/// | Client input | `BadRequestAlert`, `Validation` | 400 |
/// | Not found | `NotFoundAlert`, `NotFound` | 404 |
/// | System | `Database`, `Internal` | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client error tied to a concrete entity + machine-readable key
    /// (e.g. `idexists`, `idnull`, `idinvalid`, `required`)
    #[error("{message}")]
    BadRequestAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    /// Operate-by-id targeted a record absent from the store
    #[error("{message}")]
    NotFoundAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    /// Point lookup miss without an entity alert attached
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request-shape error (pagination/sort parameters and the like)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Store or serialization failure
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, entity_name, error_key) = match self {
            AppError::BadRequestAlert {
                entity_name,
                error_key,
                message,
            } => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                message,
                Some(entity_name),
                Some(error_key),
            ),

            AppError::NotFoundAlert {
                entity_name,
                error_key,
                message,
            } => (
                StatusCode::NOT_FOUND,
                "not_found",
                message,
                Some(entity_name),
                Some(error_key),
            ),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None, None),

            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg, None, None)
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                    None,
                    None,
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error,
            message,
            entity_name,
            error_key,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn bad_request(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::BadRequestAlert {
            entity_name,
            error_key,
            message: message.into(),
        }
    }

    pub fn not_found_alert(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFoundAlert {
            entity_name,
            error_key,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
