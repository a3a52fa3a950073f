//! # View Pagination
//!
//! Deterministic windowing of an ordered list into fixed-size, 1-based pages.
//! Out-of-range pages are empty; there is no wraparound and no error.

pub use crate::config::DEFAULT_PAGE_SIZE as PAGE_SIZE;

/// Number of pages needed for `total` items: `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Items `[(page-1)*size, page*size)` of `items`, clamped to its bounds.
pub fn paginate<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One rendered page plus what the pagination control needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_count: usize,
}

impl<T: Clone> Page<T> {
    pub fn new(items: &[T], current_page: usize, page_size: usize) -> Self {
        Self {
            items: paginate(items, current_page, page_size).to_vec(),
            current_page,
            page_count: page_count(items.len(), page_size),
        }
    }

    /// The pagination control is only drawn when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.page_count > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn twenty_five_items_make_three_pages() {
        let items = posts(25);
        assert_eq!(page_count(items.len(), PAGE_SIZE), 3);
        assert_eq!(paginate(&items, 1, PAGE_SIZE), &items[0..10]);
        assert_eq!(paginate(&items, 2, PAGE_SIZE), &items[10..20]);
        assert_eq!(paginate(&items, 3, PAGE_SIZE), &items[20..25]);
        assert_eq!(paginate(&items, 3, PAGE_SIZE).len(), 5);
        assert!(paginate(&items, 4, PAGE_SIZE).is_empty());
    }

    #[test]
    fn page_zero_and_empty_lists_yield_nothing() {
        let items = posts(5);
        assert!(paginate(&items, 0, PAGE_SIZE).is_empty());
        assert!(paginate::<usize>(&[], 1, PAGE_SIZE).is_empty());
        assert_eq!(page_count(0, PAGE_SIZE), 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(21, 10), 3);
    }

    #[test]
    fn controls_hidden_for_single_page() {
        let few = posts(7);
        let page = Page::new(&few, 1, PAGE_SIZE);
        assert_eq!(page.page_count, 1);
        assert!(!page.shows_controls());

        let none: Vec<usize> = Vec::new();
        assert!(!Page::new(&none, 1, PAGE_SIZE).shows_controls());

        let many = posts(11);
        let page = Page::new(&many, 2, PAGE_SIZE);
        assert!(page.shows_controls());
        assert_eq!(page.items, vec![10usize]);
    }
}
