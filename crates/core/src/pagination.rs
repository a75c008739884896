//! Page-based pagination for the public listing.
//!
//! Callers speak in `page`/`limit`; the store speaks in `limit`/`offset`.
//! Out-of-range input is clamped rather than rejected.

use serde::Serialize;

/// First page number.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of sites per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of sites per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A clamped page request: `page >= 1`, `1 <= limit <= MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Number of rows to skip to reach this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination block returned alongside a page of sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total_pages(total, request.limit),
        }
    }
}

/// `ceil(total / limit)`, with a non-positive limit treated as 1.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    let limit = limit.max(1);
    let total = total.max(0);
    total / limit + i64::from(total % limit != 0)
}
