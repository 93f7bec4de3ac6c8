use serde::Serialize;

/// Number of pages needed for `count` items, never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices out one page. `requested_page` is clamped to `[1, total_pages]`, so the
/// returned slice is never out of range. A `page_size` of zero is treated as one.
pub fn paginate<T>(items: &[T], page_size: usize, requested_page: usize) -> (&[T], usize) {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    let page = requested_page.clamp(1, total);

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    (&items[start..end], total)
}

/// What the pagination control shows for the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    pub pages: Vec<usize>,
    pub show_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn new(current: usize, total: usize) -> Self {
        let total = total.max(1);
        Self {
            current,
            total,
            pages: (1..=total).collect(),
            show_ellipsis: total > 5 && current + 2 < total,
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    /// The control is only shown when there is more than one page
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_a_floor_of_one() {
        for len in 0..30usize {
            let expected = std::cmp::max(1, len.div_ceil(6));
            assert_eq!(total_pages(len, 6), expected, "len {}", len);
        }
    }

    #[test]
    fn total_pages_does_not_depend_on_requested_page() {
        let items: Vec<u32> = (0..13).collect();
        for page in [0, 1, 2, 3, 99] {
            assert_eq!(paginate(&items, 6, page).1, 3);
        }
    }

    #[test]
    fn every_page_but_the_last_is_full() {
        let items: Vec<u32> = (0..13).collect();
        let total = total_pages(items.len(), 5);
        for page in 1..=total {
            let (slice, _) = paginate(&items, 5, page);
            assert!(slice.len() <= 5);
            if page < total {
                assert_eq!(slice.len(), 5);
            }
        }
        assert_eq!(paginate(&items, 5, 3).0, &[10, 11, 12]);
    }

    #[test]
    fn single_full_page() {
        let items: Vec<u32> = (1..=6).collect();
        let (slice, total) = paginate(&items, 6, 1);
        assert_eq!(slice, items.as_slice());
        assert_eq!(total, 1);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items: Vec<u32> = (1..=6).collect();
        let (slice, total) = paginate(&items, 6, 99);
        assert_eq!(total, 1);
        assert_eq!(slice, items.as_slice());

        let (slice, _) = paginate(&items, 4, 0);
        assert_eq!(slice, &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_is_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let (slice, total) = paginate(&items, 6, 5);
        assert!(slice.is_empty());
        assert_eq!(total, 1);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let items = [1, 2, 3];
        let (slice, total) = paginate(&items, 0, 2);
        assert_eq!(total, 3);
        assert_eq!(slice, &[2]);
    }

    #[test]
    fn page_window_ellipsis_rule() {
        assert!(!PageWindow::new(1, 5).show_ellipsis);
        assert!(PageWindow::new(1, 8).show_ellipsis);
        assert!(PageWindow::new(5, 8).show_ellipsis);
        assert!(!PageWindow::new(6, 8).show_ellipsis);

        let window = PageWindow::new(1, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.has_previous);
        assert!(window.has_next);
        assert!(window.is_visible());
        assert!(!PageWindow::new(1, 1).is_visible());
    }
}
