use serde::{Deserialize, Serialize};

/// Default number of records fetched per page.
pub const PAGE_SIZE_DEFAULT: i64 = 25;
/// Upper bound accepted for caller-supplied page sizes.
pub const PAGE_SIZE_MAX: i64 = 100;

/// Cursor-paginated response wrapper.
///
/// `paging.after` is an opaque continuation token; `None` means the listing
/// is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

/// Continuation metadata for cursor pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Search-index response wrapper carrying the total hit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub data: Vec<T>,
    pub total: usize,
}

/// Helper to normalize a caller-supplied page size with safe defaults.
pub fn normalize_page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(PAGE_SIZE_DEFAULT).clamp(1, PAGE_SIZE_MAX)
}
