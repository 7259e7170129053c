//! Fixed-size page slicing over the canonical sequence.

/// Page size of the browse view.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of pages needed for `len` items. Zero for an empty sequence.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The 1-based `page` of `items`, clipped to the sequence bounds.
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current position within a paginated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Advance one page; a no-op on the last page.
    pub fn next(&mut self, len: usize) -> bool {
        if self.page < page_count(len, self.page_size) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; a no-op on page 1.
    pub fn previous(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Return to page 1. Required whenever the sequence is reloaded.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Slice the current page and summarize the navigation state.
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        PageView::new(items, self.page, self.page_size)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of items together with its navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<'a, T> PageView<'a, T> {
    pub fn new(items: &'a [T], page: usize, page_size: usize) -> Self {
        Self {
            items: paginate(items, page, page_size),
            page,
            page_size,
            page_count: page_count(items.len(), page_size),
            total: items.len(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Nothing to show: the caller renders its empty state.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
