//! Page-number pagination shared by song listing and verse paging
//!
//! Pages are 1-based. Page `n` of size `s` covers the items
//! `[(n-1)*s, n*s)`; a page past the end is empty rather than an error.

use crate::error::{ApiError, ApiResult};

/// Page used when the query string does not name one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the query string does not name one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a page request; both values must be at least 1
    pub fn new(page: u32, page_size: u32) -> ApiResult<Self> {
        if page == 0 {
            return Err(ApiError::invalid_query_param("page", "must be at least 1"));
        }
        if page_size == 0 {
            return Err(ApiError::invalid_query_param(
                "page_size",
                "must be at least 1",
            ));
        }
        Ok(Self { page, page_size })
    }

    /// Parse raw `page` / `page_size` query values
    ///
    /// Absent or empty values fall back to the defaults.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> ApiResult<Self> {
        let page = parse_param("page", page, DEFAULT_PAGE)?;
        let page_size = parse_param("page_size", page_size, DEFAULT_PAGE_SIZE)?;
        Self::new(page, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.page_size))
    }

    /// Maximum number of items on this page
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Cut this page out of an in-memory sequence
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start > items.len() {
            return &[];
        }
        let end = items
            .len()
            .min(start.saturating_add(self.page_size as usize));
        &items[start..end]
    }
}

fn parse_param(name: &'static str, raw: Option<&str>, default: u32) -> ApiResult<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| {
                ApiError::invalid_query_param(name, format!("'{}' is not a positive integer", value))
            }),
    }
}
