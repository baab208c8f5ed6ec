//! Pagination arithmetic and the response envelope

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::params::{SortField, SortOrder};
use crate::models::User;

/// Position of one page within a filtered result set
///
/// ```rust
/// use user_directory::listing::PageWindow;
///
/// let window = PageWindow::new(2, 10, 35);
/// assert_eq!(window.total_pages, 4);
/// assert_eq!(window.range(35), 10..20);
/// assert!(window.has_next());
/// assert!(window.has_prev());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
    /// Items surviving the filters
    pub total_items: usize,
    /// Ceiling of `total_items / limit`
    pub total_pages: u32,
}

impl PageWindow {
    /// A zero `page` or `limit` is treated as 1.
    #[must_use]
    pub fn new(page: u32, limit: u32, total_items: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total_items,
            total_pages: calculate_total_pages(total_items as u64, limit),
        }
    }

    /// Index of the first item on this page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Slice bounds into a sequence of `len` items; empty past the end
    #[must_use]
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(self.limit as usize).min(len);
        start..end
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Calculate total pages, rounding up
fn calculate_total_pages(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page);
    let pages = total.saturating_add(per_page).saturating_sub(1) / per_page;
    pages.min(u64::from(u32::MAX)) as u32
}

/// Builds navigation links for one query
///
/// Links carry `page`, `limit`, `sortBy`, `order` and `tags` only. `search`
/// and `tagMode` are not carried over.
#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    base_path: &'a str,
    limit: u32,
    sort_by: SortField,
    order: SortOrder,
    tags: String,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(
        base_path: &'a str,
        limit: u32,
        sort_by: SortField,
        order: SortOrder,
        tags: &[String],
    ) -> Self {
        Self {
            base_path,
            limit,
            sort_by,
            order,
            tags: tags.join(","),
        }
    }

    /// Link to `page`
    pub fn page(&self, page: u32) -> String {
        format!(
            "{}?page={}&limit={}&sortBy={}&order={}&tags={}",
            self.base_path, page, self.limit, self.sort_by, self.order, self.tags
        )
    }
}

/// One page of users with pagination and sort metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub results: Vec<User>,
    pub total_items: usize,
    pub items_per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub first_page_link: String,
    pub last_page_link: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
}

impl UserPage {
    /// Assemble the envelope for `results` sitting at `window`
    pub fn new(
        results: Vec<User>,
        window: PageWindow,
        links: &LinkBuilder<'_>,
        sort_by: SortField,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            results,
            total_items: window.total_items,
            items_per_page: window.limit,
            current_page: window.page,
            total_pages: window.total_pages,
            first_page_link: links.page(1),
            last_page_link: links.page(window.total_pages),
            sort_by,
            sort_order,
            next_page_link: window.has_next().then(|| links.page(window.page + 1)),
            previous_page_link: window.has_prev().then(|| links.page(window.page - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PageWindow::new(1, 10, 35).total_pages, 4);
        assert_eq!(PageWindow::new(1, 7, 35).total_pages, 5);
        assert_eq!(PageWindow::new(1, 8, 35).total_pages, 5);
        assert_eq!(PageWindow::new(1, 35, 35).total_pages, 1);
        assert_eq!(PageWindow::new(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn test_range_last_partial_page() {
        let window = PageWindow::new(4, 10, 35);
        assert_eq!(window.range(35), 30..35);
        assert!(!window.has_next());
    }

    #[test]
    fn test_range_past_end_is_empty() {
        let window = PageWindow::new(9, 10, 35);
        assert!(window.range(35).is_empty());
        assert_eq!(window.total_pages, 4);
        assert!(window.has_prev());
    }

    #[test]
    fn test_range_huge_page_does_not_overflow() {
        let window = PageWindow::new(u32::MAX, 100, 35);
        assert!(window.range(35).is_empty());
    }

    #[test]
    fn test_zero_inputs_clamped() {
        let window = PageWindow::new(0, 0, 3);
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, 1);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_link_format() {
        let tags = vec!["developer".to_string(), "musician".to_string()];
        let links = LinkBuilder::new("/api/users", 5, SortField::Age, SortOrder::Desc, &tags);
        assert_eq!(
            links.page(3),
            "/api/users?page=3&limit=5&sortBy=age&order=desc&tags=developer,musician"
        );
    }

    #[test]
    fn test_link_with_no_tags() {
        let links = LinkBuilder::new("/api/users", 10, SortField::Id, SortOrder::Asc, &[]);
        assert_eq!(links.page(1), "/api/users?page=1&limit=10&sortBy=id&order=asc&tags=");
    }

    #[test]
    fn test_envelope_links_middle_page() {
        let links = LinkBuilder::new("/api/users", 10, SortField::Id, SortOrder::Asc, &[]);
        let page = UserPage::new(
            Vec::new(),
            PageWindow::new(2, 10, 35),
            &links,
            SortField::Id,
            SortOrder::Asc,
        );
        assert_eq!(
            page.next_page_link.as_deref(),
            Some("/api/users?page=3&limit=10&sortBy=id&order=asc&tags=")
        );
        assert_eq!(
            page.previous_page_link.as_deref(),
            Some("/api/users?page=1&limit=10&sortBy=id&order=asc&tags=")
        );
        assert_eq!(page.last_page_link, "/api/users?page=4&limit=10&sortBy=id&order=asc&tags=");
    }

    #[test]
    fn test_envelope_omits_absent_links() {
        let links = LinkBuilder::new("/api/users", 10, SortField::Id, SortOrder::Asc, &[]);
        let page = UserPage::new(
            Vec::new(),
            PageWindow::new(1, 10, 5),
            &links,
            SortField::Id,
            SortOrder::Asc,
        );
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("next_page_link").is_none());
        assert!(json.get("previous_page_link").is_none());
        assert_eq!(json["sort_by"], "id");
        assert_eq!(json["sort_order"], "asc");
    }
}
