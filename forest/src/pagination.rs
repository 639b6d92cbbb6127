//! Page arithmetic for bounded listings and pagination controls.
//!
//! Pages are 1-indexed everywhere.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Number of pages needed to show `count` items `limit` at a time.
#[must_use]
pub fn page_count(count: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}

/// Pagination controls are hidden unless there is more than one page.
#[must_use]
pub fn shows_controls(count: u32, limit: u32) -> bool {
    page_count(count, limit) > 1
}

/// Clamp a requested page into `1..=page_count` (page 1 when there are no pages).
#[must_use]
pub fn clamp_page(page: u32, page_count: u32) -> u32 {
    page.clamp(1, page_count.max(1))
}

/// One slot in a rendered pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Page buttons to render: first, last, and a window of `radius` pages around
/// `current`, with gaps where pages are skipped.
#[must_use]
pub fn visible_pages(current: u32, page_count: u32, radius: u32) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, page_count);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(page_count);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < page_count {
        if end + 1 < page_count {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(page_count));
    }
    items
}
