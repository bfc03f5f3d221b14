//! Page requests and paginated results.

use std::ops::RangeInclusive;

/// Rows shown per page when no other size is requested.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A 1-based page number paired with a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Request `page` with the default page size. Page numbers below 1 are
    /// clamped to 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self::with_per_page(page, DEFAULT_PER_PAGE)
    }

    #[must_use]
    pub fn with_per_page(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn per_page(self) -> u32 {
        self.per_page
    }

    /// SQL `LIMIT` for this page.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.per_page)
    }

    /// SQL `OFFSET` for this page.
    #[must_use]
    pub fn offset(self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of results plus enough context to render pagination links.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.request.page()
    }

    /// Number of the last page; an empty result still has one page.
    #[must_use]
    pub fn last_page(&self) -> u32 {
        let per_page = u64::from(self.request.per_page());
        let pages = self.total.div_ceil(per_page).max(1);

        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page() < self.last_page()
    }

    /// Every page number, for numbered links.
    #[must_use]
    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.last_page()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
