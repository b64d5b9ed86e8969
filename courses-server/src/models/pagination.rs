//! Pagination types for course listing

use serde::Serialize;

/// Fixed number of courses per page
pub const COURSES_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination for a page of courses.
    ///
    /// Page is clamped to a minimum of 1; page size is always
    /// [`COURSES_PER_PAGE`].
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: COURSES_PER_PAGE,
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of results plus the total number of matching rows
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    /// Calculate total number of pages.
    ///
    /// An empty result still reports one page.
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            return 1;
        }
        let total = u64::try_from(self.total).unwrap_or(u64::MAX);
        let per_page = u64::from(self.per_page.max(1));
        u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
    }
}
