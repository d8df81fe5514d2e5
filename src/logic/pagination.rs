//! Pagination logic
//!
//! Pure functions for page counts, slice bounds and control state.
//! Pages are 1-based.

use std::ops::Range;

/// Number of pages for `item_count` items, never less than 1
///
/// # Examples
/// ```
/// use prodtable::logic::pagination::total_pages;
///
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(20, 10), 2);
/// assert_eq!(total_pages(0, 10), 1);
/// ```
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    item_count.div_ceil(page_size).max(1)
}

/// Index range `[start, end)` addressed by `page`, before clamping to the data
pub fn page_range(page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    start..start.saturating_add(page_size)
}

/// Slice of `items` shown on `page` (empty when out of range)
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let range = page_range(page, page_size);
    if range.start >= items.len() {
        return &[];
    }
    &items[range.start..range.end.min(items.len())]
}

/// Clamp a page number into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// "Previous" is available unless on the first page
pub fn prev_enabled(current_page: usize) -> bool {
    current_page != 1
}

/// "Next" is available unless on the last page (zero pages counts as one)
pub fn next_enabled(current_page: usize, total_pages: usize) -> bool {
    current_page != total_pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(50, 5), 10);
    }

    #[test]
    fn test_total_pages_empty_is_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(0, 50), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 10), 0..10);
        assert_eq!(page_range(3, 10), 20..30);
    }

    #[test]
    fn test_page_slice_partial_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(page_slice(&items, 2, 5).is_empty());
        assert!(page_slice(&items, 9, 10).is_empty());

        let empty: Vec<u32> = vec![];
        assert!(page_slice(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_controls_on_single_page() {
        assert!(!prev_enabled(1));
        assert!(!next_enabled(1, 1));
        assert!(!next_enabled(1, 0));
    }

    #[test]
    fn test_controls_mid_and_last_page() {
        assert!(prev_enabled(2));
        assert!(next_enabled(2, 3));
        assert!(prev_enabled(3));
        assert!(!next_enabled(3, 3));
    }
}
