//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Required-field rules mirror the entity constraints: a required
//! field must be present and non-blank before any store access
//! happens, and the rejection carries the entity name so clients can
//! handle it programmatically.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: designation, center, navigation title, post title, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: mobile numbers, grades-as-text, lat/lon strings
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / routes / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Descriptions, comments, messages
pub const MAX_NOTE_LEN: usize = 2000;

/// Post bodies (rich text payloads)
pub const MAX_BODY_LEN: usize = 100_000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required field is present, non-blank and within the
/// length limit. The error carries the entity name and a `required`
/// error key.
pub fn validate_required_text(
    entity: &'static str,
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    let Some(v) = value else {
        return Err(AppError::bad_request(
            entity,
            "required",
            format!("{field} must not be null"),
        ));
    };
    if v.trim().is_empty() {
        return Err(AppError::bad_request(
            entity,
            "required",
            format!("{field} must not be empty"),
        ));
    }
    if v.len() > max_len {
        return Err(AppError::bad_request(
            entity,
            "required",
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    entity: &'static str,
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::bad_request(
            entity,
            "size",
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_absent_and_blank() {
        assert!(validate_required_text("designation", &None, "name", MAX_NAME_LEN).is_err());
        assert!(
            validate_required_text("designation", &Some("   ".into()), "name", MAX_NAME_LEN)
                .is_err()
        );
        assert!(
            validate_required_text("designation", &Some("Officer".into()), "name", MAX_NAME_LEN)
                .is_ok()
        );
    }

    #[test]
    fn optional_text_only_checks_length() {
        assert!(validate_optional_text("post", &None, "title", 10).is_ok());
        assert!(validate_optional_text("post", &Some("short".into()), "title", 10).is_ok());
        assert!(validate_optional_text("post", &Some("far too long".into()), "title", 10).is_err());
    }
}
