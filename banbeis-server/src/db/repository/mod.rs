//! Repository Module
//!
//! CRUD access to the embedded SurrealDB collections. Every entity
//! goes through the same generic engine ([`CrudRepository`]); the
//! per-entity aliases below are the only thing resources need.

pub mod crud;

pub use crud::CrudRepository;

use crate::db::models::{
    Center, CenterEmployee, CenterImages, Designation, District, Division, Employee, Navigation,
    Post, PostComment, PostPhoto, Upazila,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

// Per-entity repositories, all backed by the same engine
pub type DivisionRepository = CrudRepository<Division>;
pub type DistrictRepository = CrudRepository<District>;
pub type UpazilaRepository = CrudRepository<Upazila>;
pub type DesignationRepository = CrudRepository<Designation>;
pub type EmployeeRepository = CrudRepository<Employee>;
pub type CenterRepository = CrudRepository<Center>;
pub type CenterEmployeeRepository = CrudRepository<CenterEmployee>;
pub type CenterImagesRepository = CrudRepository<CenterImages>;
pub type NavigationRepository = CrudRepository<Navigation>;
pub type PostRepository = CrudRepository<Post>;
pub type PostPhotoRepository = CrudRepository<PostPhoto>;
pub type PostCommentRepository = CrudRepository<PostComment>;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" end to end
// =============================================================================
//
// API JSON carries record ids as "table:id" strings. Path parameters
// accept either "table:id" or the bare key; `record_key` normalizes
// before any store call.

/// Strip the table prefix from an id if present ("division:dhaka" -> "dhaka").
/// Keys the store had to escape ("division:⟨3⟩") are unescaped too, so a
/// client can echo back any id it was handed.
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    let key = match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        _ => id,
    };
    key.strip_prefix('⟨')
        .and_then(|k| k.strip_suffix('⟩'))
        .unwrap_or(key)
}

/// Whether a client-supplied field name is safe to interpolate into an
/// ORDER BY clause. Plain identifiers only.
pub fn is_safe_field(field: &str) -> bool {
    !field.is_empty()
        && field.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Sort key + direction
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

/// Page window for list queries (0-based page index)
#[derive(Debug, Clone)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl Pageable {
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_strips_only_matching_prefix() {
        assert_eq!(record_key("division", "division:dhaka"), "dhaka");
        assert_eq!(record_key("division", "dhaka"), "dhaka");
        // A prefix for a different table is left alone
        assert_eq!(record_key("division", "district:dhaka"), "district:dhaka");
        // Escaped keys unescape
        assert_eq!(record_key("division", "division:⟨3⟩"), "3");
        assert_eq!(record_key("division", "⟨3⟩"), "3");
    }

    #[test]
    fn safe_field_rejects_injection_shapes() {
        assert!(is_safe_field("sort_name"));
        assert!(is_safe_field("grade"));
        assert!(!is_safe_field(""));
        assert!(!is_safe_field("name; DELETE division"));
        assert!(!is_safe_field("name,desc"));
        assert!(!is_safe_field("1name"));
    }
}
