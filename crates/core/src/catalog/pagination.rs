//! Skip/take page view over an already filtered list

use shipyard_domain::{Result, ShipyardError};

/// One page of results plus the numbers needed to render page links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl<T> PageView<T> {
    /// Slice `items` into page `page` (1-based) of `limit` entries.
    ///
    /// A page below 1 is treated as 1. A page past the end yields no items but
    /// keeps the totals.
    ///
    /// # Errors
    /// `ShipyardError::InvalidInput` when `limit` is zero.
    pub fn paginate(items: Vec<T>, page: usize, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(ShipyardError::InvalidInput("page limit must be at least 1".into()));
        }

        let current_page = page.max(1);
        let total_records = items.len();
        let total_pages = total_records.div_ceil(limit);
        let skip = (current_page - 1).saturating_mul(limit);

        let items = items.into_iter().skip(skip).take(limit).collect();
        Ok(Self { items, current_page, total_pages, total_records })
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
