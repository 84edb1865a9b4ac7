/// Inclusive range of row indices shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Number of rows on the page.
    pub fn row_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Visible window keeping the pointer near the middle of the page.
///
/// The page is shifted back near the end of the table so it always shows
/// `min(page_size, row_count)` rows and never scrolls past the last row.
/// A pointer past the last row is treated as the last row.
pub fn compute_window(pointer: usize, page_size: usize, row_count: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let last_row = row_count.saturating_sub(1);

    let pointer = pointer.min(last_row);

    let mid = page_size / 2;
    let first = pointer.saturating_sub(mid);
    let last = first.saturating_add(page_size - 1).min(last_row);
    let overflow = (page_size - 1).saturating_sub(last - first);

    PageWindow {
        start: first.saturating_sub(overflow),
        end: last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_pointer() {
        assert_eq!(compute_window(2, 3, 6), PageWindow { start: 1, end: 3 });
        assert_eq!(compute_window(4, 5, 20), PageWindow { start: 2, end: 6 });
    }

    #[test]
    fn pins_to_top_and_bottom() {
        assert_eq!(compute_window(0, 3, 6), PageWindow { start: 0, end: 2 });
        assert_eq!(compute_window(5, 3, 6), PageWindow { start: 3, end: 5 });
    }

    #[test]
    fn page_larger_than_table_shows_everything() {
        for pointer in 0..3 {
            assert_eq!(compute_window(pointer, 5, 3), PageWindow { start: 0, end: 2 });
        }
    }

    #[test]
    fn out_of_range_pointer_lands_on_last_page() {
        assert_eq!(compute_window(9, 3, 6), PageWindow { start: 3, end: 5 });
        assert_eq!(compute_window(0, 3, 0), PageWindow { start: 0, end: 0 });
    }

    #[test]
    fn window_always_full_and_contains_pointer() {
        for row_count in 1..12 {
            for page_size in 1..8 {
                for pointer in 0..row_count {
                    let window = compute_window(pointer, page_size, row_count);
                    assert!(window.contains(pointer));
                    assert!(window.end < row_count);
                    assert_eq!(window.row_count(), page_size.min(row_count));
                }
            }
        }
    }
}
