use serde::Serialize;

use crate::app_system::ViewError;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side page index.
///
/// Every record is fetched in one call; the page only decides which slice is
/// shown and how the sequential numbers are offset. The same `page_size` must
/// drive both, so it lives here rather than in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u32,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Starts on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[cfg(test)]
    pub fn at(page: u32, page_size: usize) -> Result<Self, ViewError> {
        let mut pagination = Self::new(page_size);
        pagination.set_page(page)?;
        Ok(pagination)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), ViewError> {
        if page == 0 {
            return Err(ViewError::InvalidPage(page));
        }
        self.page = page;
        Ok(())
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size)
    }

    /// 1-based sequential number for the row at `index` on the current page.
    pub fn display_number(&self, index: usize) -> usize {
        index.saturating_add(1).saturating_add(self.offset())
    }

    /// The rows the renderer shows for the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }
}
