//! Pagination envelope
//!
//! Query-side parsing of `page`/`size`/`sort` parameters and
//! response-side generation of the `X-Total-Count` and RFC-5988 `Link`
//! headers every listing endpoint carries. Pages are 0-based; `sort`
//! is `field` or `field,asc|desc`.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::db::repository::{Direction, Pageable, Sort, is_safe_field};
use crate::utils::{AppError, AppResult};

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Listing endpoints cap the page size instead of rejecting large
/// requests outright.
pub const MAX_PAGE_SIZE: u64 = 1000;

const DEFAULT_PAGE_SIZE: u64 = 20;

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Raw pagination query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    #[serde(default)]
    pub sort: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    /// Validate the raw parameters into a store-ready page window
    pub fn pageable(&self) -> AppResult<Pageable> {
        if self.size == 0 {
            return Err(AppError::validation("Page size must be greater than zero"));
        }
        let sort = match self.sort.as_deref() {
            Some(raw) => Some(parse_sort(raw)?),
            None => None,
        };
        Ok(Pageable {
            page: self.page,
            size: self.size.min(MAX_PAGE_SIZE),
            sort,
        })
    }
}

fn parse_sort(raw: &str) -> AppResult<Sort> {
    let (field, direction) = match raw.split_once(',') {
        Some((field, direction)) => (field, direction),
        None => (raw, "asc"),
    };
    let direction = match direction.to_ascii_lowercase().as_str() {
        "asc" => Direction::Asc,
        "desc" => Direction::Desc,
        other => {
            return Err(AppError::validation(format!(
                "Invalid sort direction: {other}"
            )));
        }
    };
    if !is_safe_field(field) {
        return Err(AppError::validation(format!("Invalid sort field: {field}")));
    }
    Ok(Sort {
        field: field.to_string(),
        direction,
    })
}

/// Build the `X-Total-Count` + `Link` headers for one result page
pub fn pagination_headers(path: &str, request: &PageRequest, total: u64) -> AppResult<HeaderMap> {
    let size = request.size.max(1).min(MAX_PAGE_SIZE);
    let total_pages = total.div_ceil(size);
    let last_page = total_pages.saturating_sub(1);
    let page = request.page;

    let mut links = Vec::new();
    if page < last_page {
        links.push(page_link(path, page + 1, request, "next"));
    }
    if page > 0 {
        links.push(page_link(path, page - 1, request, "prev"));
    }
    links.push(page_link(path, last_page, request, "last"));
    links.push(page_link(path, 0, request, "first"));

    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(total));
    headers.insert(
        axum::http::header::LINK,
        HeaderValue::from_str(&links.join(","))
            .map_err(|e| AppError::internal(format!("Invalid Link header: {e}")))?,
    );
    Ok(headers)
}

fn page_link(path: &str, page: u64, request: &PageRequest, rel: &str) -> String {
    let mut query = format!("page={}&size={}", page, request.size);
    if let Some(sort) = &request.sort {
        query.push_str("&sort=");
        query.push_str(sort);
    }
    format!("<{path}?{query}>; rel=\"{rel}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u64, size: u64, sort: Option<&str>) -> PageRequest {
        PageRequest {
            page,
            size,
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn sort_parses_field_and_direction() {
        let pageable = request(0, 20, Some("name,desc")).pageable().unwrap();
        let sort = pageable.sort.unwrap();
        assert_eq!(sort.field, "name");
        assert_eq!(sort.direction, Direction::Desc);

        // Direction defaults to ascending
        let pageable = request(0, 20, Some("grade")).pageable().unwrap();
        assert_eq!(pageable.sort.unwrap().direction, Direction::Asc);
    }

    #[test]
    fn sort_rejects_bad_input() {
        assert!(request(0, 20, Some("name,sideways")).pageable().is_err());
        assert!(request(0, 20, Some("na me,asc")).pageable().is_err());
        assert!(request(0, 0, None).pageable().is_err());
    }

    #[test]
    fn middle_page_links_carry_all_relations() {
        // 50 records, size 20 -> pages 0..=2; page 1 has every link
        let headers = pagination_headers("/api/divisions", &request(1, 20, None), 50).unwrap();
        assert_eq!(headers.get(X_TOTAL_COUNT).unwrap(), "50");
        let link = headers.get(axum::http::header::LINK).unwrap().to_str().unwrap();
        assert!(link.contains(r#"</api/divisions?page=2&size=20>; rel="next""#));
        assert!(link.contains(r#"</api/divisions?page=0&size=20>; rel="prev""#));
        assert!(link.contains(r#"</api/divisions?page=2&size=20>; rel="last""#));
        assert!(link.contains(r#"</api/divisions?page=0&size=20>; rel="first""#));
    }

    #[test]
    fn first_and_last_pages_omit_missing_neighbours() {
        let headers = pagination_headers("/api/divisions", &request(0, 20, None), 50).unwrap();
        let link = headers.get(axum::http::header::LINK).unwrap().to_str().unwrap();
        assert!(!link.contains(r#"rel="prev""#));
        assert!(link.contains(r#"rel="next""#));

        let headers = pagination_headers("/api/divisions", &request(2, 20, None), 50).unwrap();
        let link = headers.get(axum::http::header::LINK).unwrap().to_str().unwrap();
        assert!(!link.contains(r#"rel="next""#));
        assert!(link.contains(r#"rel="prev""#));
    }

    #[test]
    fn empty_collection_still_yields_first_and_last() {
        let headers = pagination_headers("/api/posts", &request(0, 20, None), 0).unwrap();
        assert_eq!(headers.get(X_TOTAL_COUNT).unwrap(), "0");
        let link = headers.get(axum::http::header::LINK).unwrap().to_str().unwrap();
        assert!(link.contains(r#"</api/posts?page=0&size=20>; rel="last""#));
        assert!(link.contains(r#"</api/posts?page=0&size=20>; rel="first""#));
    }

    #[test]
    fn sort_parameter_propagates_into_links() {
        let headers =
            pagination_headers("/api/designations", &request(0, 10, Some("grade,desc")), 30)
                .unwrap();
        let link = headers.get(axum::http::header::LINK).unwrap().to_str().unwrap();
        assert!(link.contains("sort=grade,desc"));
    }
}
