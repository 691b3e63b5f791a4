//! Filter & paginate — the pure computation behind the gallery grid.
//!
//! [`select`] takes the indexed categories, the full item list, the active
//! category id, and a 1-indexed page, and returns the visible slice plus the
//! page count. It is a pure function over its inputs: it does not clamp the
//! page and does not reset anything on category change — those invariants
//! belong to the caller (see `GallerySession`), which keeps this layer
//! trivially testable.

use crate::category::Category;
use crate::manifest::MediaItem;

/// Sentinel category id selecting the whole manifest in manifest order.
pub const ALL_CATEGORIES: &str = "all";

/// One page of the filtered grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Items on the requested page, in source order. Empty when `page` is
    /// out of range (0 or beyond `total_pages`).
    pub visible: Vec<&'a MediaItem>,
    /// `ceil(source_len / page_size)`, never less than 1.
    pub total_pages: usize,
}

/// Compute the visible page for `active_category_id`.
///
/// `ALL_CATEGORIES` selects `all_items` in manifest order; otherwise the
/// matching category's members. An unknown category id behaves like an empty
/// category (one page, nothing visible).
///
/// Out-of-range pages yield an empty `visible` — deliberately no clamping
/// here; the session layer clamps before calling.
pub fn select<'a>(
    categories: &[Category],
    all_items: &'a [MediaItem],
    active_category_id: &str,
    page: usize,
    page_size: usize,
) -> PageView<'a> {
    let source: Vec<&MediaItem> = if active_category_id == ALL_CATEGORIES {
        all_items.iter().collect()
    } else {
        categories
            .iter()
            .find(|c| c.id == active_category_id)
            .map(|c| c.items.iter().filter_map(|&i| all_items.get(i)).collect())
            .unwrap_or_default()
    };

    if page_size == 0 {
        return PageView {
            visible: Vec::new(),
            total_pages: 1,
        };
    }

    let total_pages = source.len().div_ceil(page_size).max(1);

    // Checked arithmetic: any page whose slice start cannot even be
    // computed is out of range by definition, same as page 0.
    let start = page.checked_sub(1).and_then(|p| p.checked_mul(page_size));
    let visible = match start {
        Some(start) => source
            .get(start..source.len().min(start.saturating_add(page_size)))
            .map(|page| page.to_vec())
            .unwrap_or_default(),
        None => Vec::new(),
    };

    PageView {
        visible,
        total_pages,
    }
}

/// Number of pages a list of `len` items spans at `page_size` (minimum 1).
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}
