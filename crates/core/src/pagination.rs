//! Client-side pagination over an already-fetched list.
//!
//! The demo API is fetched in full and sliced locally, exactly as the
//! storefront displays it: a fixed page size, 1-based page numbers, and no
//! error for out-of-range pages (they simply render nothing).

/// A pagination cursor: current page plus fixed page size.
///
/// Pages are 1-based. The cursor is only ever moved by user pagination
/// clicks; it is carried in the query string and is deliberately not reset
/// when the category selection changes (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    per_page: usize,
}

impl Pager {
    /// Page size used by the product grid.
    pub const DEFAULT_PER_PAGE: usize = 12;

    /// Create a pager for the given 1-based page.
    ///
    /// A page of 0 is clamped to 1 and a page size of 0 is clamped to 1, so
    /// a pager can always produce a well-defined slice.
    #[must_use]
    pub const fn new(page: u32, per_page: usize) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            per_page: if per_page == 0 { 1 } else { per_page },
        }
    }

    /// The current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The fixed page size.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// The sub-list visible on the current page.
    ///
    /// Returns `[(page-1)*size, page*size)`. The last page may be a partial
    /// slice; any page past the end yields an empty slice.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page as usize - 1).saturating_mul(self.per_page);
        let end = start.saturating_add(self.per_page).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    /// Number of pages needed to show `len` items.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> u32 {
        let pages = len.div_ceil(self.per_page);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The 1-based page numbers to render as pagination links.
    ///
    /// Empty when there are no items at all.
    #[must_use]
    pub fn page_numbers(&self, len: usize) -> Vec<u32> {
        (1..=self.total_pages(len)).collect()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_slice() {
        let items: Vec<i32> = (0..30).collect();
        let pager = Pager::new(1, 12);
        assert_eq!(pager.slice(&items).len(), 12);
        assert_eq!(pager.slice(&items)[0], 0);
    }

    #[test]
    fn test_last_page_is_partial() {
        // 30 items at 12 per page: page 3 holds the remaining 6.
        let items: Vec<i32> = (0..30).collect();
        let pager = Pager::new(3, 12);
        let slice = pager.slice(&items);
        assert_eq!(slice.len(), 6);
        assert_eq!(slice[0], 24);
    }

    #[test]
    fn test_slice_length_formula() {
        // For any valid page, the slice length is min(S, N - (page-1)*S).
        let items: Vec<i32> = (0..25).collect();
        for page in 1..=3u32 {
            let pager = Pager::new(page, 10);
            let expected = 10usize.min(25 - (page as usize - 1) * 10);
            assert_eq!(pager.slice(&items).len(), expected, "page {page}");
        }
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<i32> = (0..25).collect();
        let pager = Pager::new(4, 10);
        assert!(pager.slice(&items).is_empty());

        // Far out of range must not overflow.
        let pager = Pager::new(u32::MAX, 10);
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<i32> = Vec::new();
        let pager = Pager::default();
        assert!(pager.slice(&items).is_empty());
        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.page_numbers(0).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Pager::new(1, 12);
        assert_eq!(pager.total_pages(12), 1);
        assert_eq!(pager.total_pages(13), 2);
        assert_eq!(pager.total_pages(24), 2);
    }

    #[test]
    fn test_page_numbers() {
        let pager = Pager::new(1, 10);
        assert_eq!(pager.page_numbers(25), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let items: Vec<i32> = (0..5).collect();
        let pager = Pager::new(0, 10);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.slice(&items).len(), 5);
    }

    #[test]
    fn test_filter_then_paginate() {
        use crate::types::{Category, Product, in_category};

        let make = |id: i64, category: &str| Product {
            id,
            title: String::new(),
            description: String::new(),
            price: 0.0,
            rating: 0.0,
            stock: 0,
            thumbnail: String::new(),
            images: Vec::new(),
            category: Category::parse(category).unwrap(),
        };

        // Three products, two in category "A": filtering then taking page 1
        // at size 10 shows both.
        let products = vec![make(1, "A"), make(2, "B"), make(3, "A")];
        let category = Category::parse("A").unwrap();
        let filtered = in_category(&products, &category);

        let pager = Pager::new(1, 10);
        let page = pager.slice(&filtered);
        let ids: Vec<i64> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
