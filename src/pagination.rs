//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items to display per page.
    pub page_size: u64,
    /// The largest page count for which every page is shown in the pagination
    /// indicator. Larger page counts are collapsed with ellipses.
    pub max_pages: u64,
    /// How many pages either side of the current page to show when the
    /// pagination indicator is collapsed.
    pub visible_radius: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
            max_pages: 10,
            visible_radius: 3,
        }
    }
}

/// One entry in the list of page links shown under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page that is currently displayed.
    CurrPage(u64),
    /// A placeholder for a run of pages that are not shown.
    Ellipsis,
}

/// The number of pages needed to show `item_count` items, `page_size` at a time.
///
/// Zero items (or a page size of zero) gives zero pages.
pub fn page_count(item_count: usize, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    (item_count as u64).div_ceil(page_size)
}

/// Get the items on page `page` (starting from 1).
///
/// The slice is clamped to the bounds of `items`, so the last page may be
/// shorter than `page_size` and pages past the end are empty. Page 0 is
/// treated as page 1.
pub fn page_slice<T>(items: &[T], page: u64, page_size: u64) -> &[T] {
    let page = page.max(1);
    let to_index = |value: u64| usize::try_from(value).unwrap_or(usize::MAX).min(items.len());

    let start = to_index((page - 1).saturating_mul(page_size));
    let end = to_index(page.saturating_mul(page_size));

    &items[start..end]
}

/// Create the list of page links for `curr_page` out of `page_count` pages.
///
/// If there are at most `config.max_pages` pages, every page is listed.
/// Otherwise the first and last pages are always listed along with the pages
/// within `config.visible_radius` of the current page, and the gaps between
/// them are replaced by [PaginationIndicator::Ellipsis].
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    config: &PaginationConfig,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    if page_count <= config.max_pages {
        return (1..=page_count).map(map_page).collect();
    }

    let radius = config.visible_radius;
    let mut indicators = vec![map_page(1)];

    if curr_page > radius + 2 {
        indicators.push(PaginationIndicator::Ellipsis);
    }

    let window_start = curr_page.saturating_sub(radius).max(2);
    let window_end = curr_page.saturating_add(radius).min(page_count - 1);
    indicators.extend((window_start..=window_end).map(map_page));

    if curr_page.saturating_add(radius + 1) < page_count {
        indicators.push(PaginationIndicator::Ellipsis);
    }

    indicators.push(map_page(page_count));

    indicators
}
