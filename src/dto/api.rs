//! Envelopes returned by the `/api/*/members` endpoints.

use serde::Serialize;

use crate::pagination::Page;

/// Top-level response body: `{ "count": .., "data": .. }`.
#[derive(Debug, Serialize, PartialEq)]
pub struct JsonResult<T> {
    /// Items returned for the unpaged endpoint, page size for paged ones.
    pub count: i64,
    pub data: T,
}

/// Page of results in the shape clients of the paged endpoints expect.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    /// Requested page size.
    pub size: i64,
    /// Zero-based page number.
    pub number: i64,
    pub offset: i64,
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            total_pages: page.total_pages(),
            number: page.number(),
            total_elements: page.total_count,
            size: page.limit,
            offset: page.offset,
            content: page.items,
        }
    }
}
