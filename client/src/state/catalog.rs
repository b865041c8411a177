//! Product catalog filter, paginator and view mode.
//!
//! DESIGN
//! ======
//! Pages are 1-based and always at least one page exists, so an empty
//! category renders an empty first page instead of an out-of-range state.
//! Changing category resets to page 1; prev/next clamp at the ends.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::content::{self, Product, ProductCategory};

pub const PAGE_SIZE: usize = 6;

/// Card layout of the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Number of pages for `count` items: `max(1, ceil(count / PAGE_SIZE))`.
pub fn page_count(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Items on 1-based `page`; empty when the page is past the end.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// 1-based inclusive range shown on `page`, or `(0, 0)` for no items.
pub fn showing_range(count: usize, page: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let start = page.saturating_sub(1) * PAGE_SIZE + 1;
    if start > count {
        return (0, 0);
    }
    (start, (start + PAGE_SIZE - 1).min(count))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub category: ProductCategory,
    pub page: usize,
    pub view: ViewMode,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            category: ProductCategory::All,
            page: 1,
            view: ViewMode::Grid,
        }
    }
}

impl CatalogState {
    /// Products passing the active category.
    pub fn filtered(&self) -> Vec<&'static Product> {
        content::products_by_category(self.category)
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered().len())
    }

    /// Products on the current page.
    pub fn page_items(&self) -> Vec<&'static Product> {
        page_slice(&self.filtered(), self.page).to_vec()
    }

    /// `(first, last, total)` for the "showing a–b of N" label.
    pub fn showing(&self) -> (usize, usize, usize) {
        let total = self.filtered().len();
        let (first, last) = showing_range(total, self.page);
        (first, last, total)
    }

    /// Select a category and return to the first page.
    pub fn set_category(&mut self, category: ProductCategory) {
        self.category = category;
        self.page = 1;
    }

    /// Jump to `page`, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn prev(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.page + 1);
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }
}
