//! Fixed-size pagination over the filtered view.
//!
//! Pages are 1-based. A page outside `1..=total_pages` is not clamped here: it simply
//! yields an empty slice. The page bar only offers in-range pages.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items (0 items ⇒ 0 pages).
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `page` within `len` items, empty when out of range.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Items shown on `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(page, page_size, items.len())]
}

/// A numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// What the page bar renders for a given position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub show_prev: bool,
    pub show_next: bool,
    pub buttons: Vec<PageButton>,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            show_prev: current > 1,
            show_next: current < total,
            buttons: (1..=total)
                .map(|number| PageButton {
                    number,
                    active: number == current,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
