// src/paginate.rs
//
// Fixed-size pagination plus the windowed page-number strip. Pages are
// 1-based throughout. `page_bounds` does not clamp; detecting a stale
// out-of-range page (e.g. after a filter shrinks the result set) and
// resetting it is the state layer's job.

use std::ops::Range;

use crate::config::consts::PAGE_WINDOW;

/// Always at least 1, even for an empty collection.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Item range for `page`; caller guarantees `1 <= page <= total_pages`.
/// The end is capped so the last page may be short.
pub fn page_bounds(total_items: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = (page.saturating_sub(1)) * page_size;
    let end = (start + page_size).min(total_items);
    if start >= end {
        return 0..0;
    }
    start..end
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One slot in the pager strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Num(usize),
    Gap,
}

/// Windowed display list: `PAGE_WINDOW` pages on each side of the current
/// page, endpoints always present. A gap that skips exactly one page shows
/// that page instead of an ellipsis; wider gaps collapse to one Gap token.
/// One page or less → empty (the pager is suppressed entirely).
pub fn page_numbers(current: usize, total: usize) -> Vec<PageToken> {
    if total <= 1 {
        return Vec::new();
    }

    let current = clamp_page(current, total);
    let lo = current.saturating_sub(PAGE_WINDOW).max(1);
    let hi = (current + PAGE_WINDOW).min(total);

    let mut out = Vec::new();

    if lo > 1 {
        out.push(PageToken::Num(1));
        match lo {
            2 => {}                                // contiguous
            3 => out.push(PageToken::Num(2)),      // single skipped page
            _ => out.push(PageToken::Gap),
        }
    }

    for p in lo..=hi {
        out.push(PageToken::Num(p));
    }

    if hi < total {
        match total - hi {
            1 => {}                                     // contiguous
            2 => out.push(PageToken::Num(total - 1)),   // single skipped page
            _ => out.push(PageToken::Gap),
        }
        out.push(PageToken::Num(total));
    }

    out
}
