//! Client-side pagination over an in-memory result list. Pages are 1-indexed.

/// Articles shown per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` items. Zero items means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// The items on `page`; empty when the page is out of range
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// One page forward, staying put on the last page
pub fn next_page(page: usize, total: usize) -> usize {
    if page < total {
        page + 1
    } else {
        page
    }
}

/// One page back, staying put on the first page
pub fn previous_page(page: usize) -> usize {
    if page > 1 {
        page - 1
    } else {
        page
    }
}

/// Whether `count` items need the previous/next controls at all
pub fn needs_pagination(count: usize) -> bool {
    count > PAGE_SIZE
}
