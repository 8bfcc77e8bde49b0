//! "Load more" pagination over a result set.

use core::num::NonZeroUsize;

/// Number of items to show: `min(page * page_size, len)`.
pub fn visible_count(page: usize, page_size: usize, len: usize) -> usize {
    page.saturating_mul(page_size).min(len)
}

/// Pagination state: a 1-based page number over a fixed page size.
///
/// The page only grows (via [`Pagination::advance`]) or returns to 1 (via
/// [`Pagination::reset`]). There is no upper bound; the visible count is
/// clamped to the result-set length instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: NonZeroUsize,
}

impl Pagination {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn visible_count(&self, len: usize) -> usize {
        visible_count(self.page, self.page_size.get(), len)
    }

    /// Whether a "load more" affordance should be offered.
    pub fn has_more(&self, len: usize) -> bool {
        self.visible_count(len) < len
    }

    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}
