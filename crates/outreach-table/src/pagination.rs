//! Page control and page-number windowing.

use std::ops::Range;

/// Who owns the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// The table keeps its own page counter and slices the filtered rows.
    SelfManaged {
        /// 1-indexed current page.
        current_page: usize,
    },
    /// The owning page drives pagination (server-side paging). The table
    /// receives only the rows of the current page plus the total row count,
    /// and reports page changes instead of applying them.
    ExternallyDriven {
        /// 1-indexed current page.
        current_page: usize,
        /// Total number of rows on the server.
        total_items: usize,
    },
}

impl Default for PageControl {
    fn default() -> Self {
        Self::SelfManaged { current_page: 1 }
    }
}

impl PageControl {
    /// The 1-indexed current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        match self {
            Self::SelfManaged { current_page } | Self::ExternallyDriven { current_page, .. } => {
                *current_page
            }
        }
    }

    /// Whether the owning page drives pagination.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::ExternallyDriven { .. })
    }

    /// Total row count used for page math, given the post-filter count.
    #[must_use]
    pub const fn total_count(&self, filtered_count: usize) -> usize {
        match self {
            Self::SelfManaged { .. } => filtered_count,
            Self::ExternallyDriven { total_items, .. } => *total_items,
        }
    }
}

/// Number of pages needed for `total_count` rows.
#[must_use]
pub const fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Index window of `page` within `len` rows, clamped to the available rows.
#[must_use]
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap in the numbering.
    Ellipsis,
}

/// Page-number buttons for `current` out of `total` pages.
///
/// Up to five pages are all shown. Beyond that the strip is compressed to
/// `1 2 3 4 … N` near the start, `1 … N-3 N-2 N-1 N` near the end and
/// `1 … p-1 p p+1 … N` in between.
#[must_use]
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 5 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);
    if current <= 3 {
        items.extend((1..=4).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 3..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    mod total_pages_tests {
        use super::*;

        #[test]
        fn rounds_up() {
            assert_eq!(total_pages(0, 10), 0);
            assert_eq!(total_pages(10, 10), 1);
            assert_eq!(total_pages(11, 10), 2);
        }

        #[test]
        fn external_total_overrides_filtered_count() {
            let control = PageControl::ExternallyDriven {
                current_page: 1,
                total_items: 95,
            };
            assert_eq!(control.total_count(10), 95);
            assert_eq!(PageControl::default().total_count(10), 10);
        }
    }

    mod range_tests {
        use super::*;

        #[test]
        fn slices_page_window() {
            assert_eq!(page_range(1, 10, 25), 0..10);
            assert_eq!(page_range(3, 10, 25), 20..25);
        }

        #[test]
        fn page_past_end_is_empty() {
            assert_eq!(page_range(4, 10, 25), 25..25);
        }
    }

    mod window_tests {
        use super::*;

        #[test]
        fn small_totals_show_every_page() {
            assert_eq!(
                page_items(2, 5),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
            );
            assert!(page_items(1, 0).is_empty());
        }

        #[test]
        fn near_start() {
            let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
            assert_eq!(page_items(1, 10), expected);
            assert_eq!(page_items(3, 10), expected);
        }

        #[test]
        fn near_end() {
            let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
            assert_eq!(page_items(8, 10), expected);
            assert_eq!(page_items(10, 10), expected);
        }

        #[test]
        fn middle() {
            assert_eq!(
                page_items(5, 10),
                vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
            );
        }

        #[test]
        fn six_pages_on_page_four() {
            assert_eq!(
                page_items(4, 6),
                vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
            );
        }
    }
}
