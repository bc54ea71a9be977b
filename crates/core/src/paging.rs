//! Page arithmetic for tabular views.
//!
//! Pages are 1-based to match what the console displays. All helpers clamp
//! rather than error: a request for a page past the end lands on the last
//! page, and a page below 1 lands on the first.

// ---------------------------------------------------------------------------
// Page arithmetic
// ---------------------------------------------------------------------------

/// Number of pages needed to show `len` records at `page_size` per page.
/// An empty list has zero pages. A `page_size` of zero is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let page_size = page_size.max(1);
    len.div_ceil(page_size)
}

/// Clamp a requested 1-based page number into the valid range.
/// Even an empty list has a valid page 1, so the view always has a
/// current page to render.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    let last = total_pages(len, page_size).max(1);
    page.clamp(1, last)
}

/// The records visible on `page`, after clamping.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = clamp_page(page, items.len(), page_size);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    if start >= items.len() {
        return &[];
    }
    &items[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- total_pages ---------------------------------------------------------

    #[test]
    fn one_page_when_everything_fits() {
        assert_eq!(total_pages(5, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
    }

    #[test]
    fn partial_last_page_still_counts() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(26, 25), 2);
    }

    #[test]
    fn empty_list_has_zero_pages() {
        assert_eq!(total_pages(0, 25), 0);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        assert_eq!(total_pages(3, 0), 3);
    }

    // -- clamp_page ----------------------------------------------------------

    #[test]
    fn in_range_page_is_unchanged() {
        assert_eq!(clamp_page(2, 5, 2), 2);
    }

    #[test]
    fn page_past_the_end_lands_on_the_last_page() {
        assert_eq!(clamp_page(99, 5, 2), 3);
    }

    #[test]
    fn page_zero_lands_on_the_first_page() {
        assert_eq!(clamp_page(0, 5, 2), 1);
    }

    #[test]
    fn empty_list_still_has_page_one() {
        assert_eq!(clamp_page(1, 0, 25), 1);
        assert_eq!(clamp_page(7, 0, 25), 1);
    }

    // -- page_slice ----------------------------------------------------------

    #[test]
    fn slices_follow_page_boundaries() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1, 2), &[1, 2]);
        assert_eq!(page_slice(&items, 2, 2), &[3, 4]);
        assert_eq!(page_slice(&items, 3, 2), &[5]);
    }

    #[test]
    fn large_page_size_returns_everything_on_page_one() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1, 25), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn out_of_range_page_is_clamped_to_the_last() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 9, 2), &[5]);
    }

    #[test]
    fn empty_items_slice_to_empty() {
        let items: [i32; 0] = [];
        assert_eq!(page_slice(&items, 1, 25), &[] as &[i32]);
    }
}
