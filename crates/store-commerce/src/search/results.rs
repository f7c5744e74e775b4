//! Catalog page results and paging metadata.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Paging metadata for one page of a (possibly filtered) product list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagingInfo {
    /// Current page (1-indexed).
    pub current_page: i64,
    /// Items per page.
    pub items_per_page: i64,
    /// Total number of items across all pages.
    pub total_items: i64,
}

impl PagingInfo {
    /// Create paging info.
    pub fn new(current_page: i64, items_per_page: i64, total_items: i64) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
        }
    }

    /// Total number of pages; zero when there are no items.
    pub fn total_pages(&self) -> i64 {
        if self.items_per_page <= 0 {
            return 0;
        }
        let whole = self.total_items / self.items_per_page;
        if self.total_items % self.items_per_page == 0 {
            whole
        } else {
            whole + 1
        }
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.current_page - 1).saturating_mul(self.items_per_page)
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Get start item number (1-indexed), or 0 for an empty page.
    pub fn start_item(&self) -> i64 {
        if self.offset() >= self.total_items {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number, or 0 for an empty page.
    pub fn end_item(&self) -> i64 {
        if self.offset() >= self.total_items {
            return 0;
        }
        self.current_page
            .saturating_mul(self.items_per_page)
            .min(self.total_items)
    }

    /// Links for every page, with the current one selected.
    ///
    /// `url` maps a page number to its address.
    pub fn page_links(&self, url: impl Fn(i64) -> String) -> Vec<PageLink> {
        (1..=self.total_pages())
            .map(|page| PageLink {
                page,
                url: url(page),
                selected: page == self.current_page,
            })
            .collect()
    }
}

/// A link to one page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLink {
    /// Page number.
    pub page: i64,
    /// Link target.
    pub url: String,
    /// Whether this is the page being shown.
    pub selected: bool,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPage {
    /// Products on this page, ordered by id.
    pub products: Vec<Product>,
    /// Paging metadata.
    pub paging: PagingInfo,
    /// The category filter that produced this page.
    pub current_category: Option<String>,
}

impl CatalogPage {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get number of products on this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PagingInfo::new(2, 3, 5).total_pages(), 2);
        assert_eq!(PagingInfo::new(1, 10, 45).total_pages(), 5);
        assert_eq!(PagingInfo::new(1, 5, 5).total_pages(), 1);
        assert_eq!(PagingInfo::new(1, 5, 0).total_pages(), 0);
    }

    #[test]
    fn test_paging_navigation() {
        let first = PagingInfo::new(1, 10, 45);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PagingInfo::new(5, 10, 45);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_paging_item_range() {
        let p = PagingInfo::new(2, 10, 45);
        assert_eq!(p.offset(), 10);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        let last = PagingInfo::new(2, 3, 5);
        assert_eq!((last.start_item(), last.end_item()), (4, 5));
    }

    #[test]
    fn test_page_past_the_end_has_empty_range() {
        let past_end = PagingInfo::new(4, 3, 5);
        assert_eq!(past_end.start_item(), 0);
        assert_eq!(past_end.end_item(), 0);

        let empty = PagingInfo::new(1, 5, 0);
        assert_eq!((empty.start_item(), empty.end_item()), (0, 0));
    }

    #[test]
    fn test_can_generate_page_links() {
        let paging = PagingInfo::new(2, 10, 28);
        let links = paging.page_links(|i| format!("Page{}", i));

        assert_eq!(
            links,
            vec![
                PageLink {
                    page: 1,
                    url: "Page1".into(),
                    selected: false,
                },
                PageLink {
                    page: 2,
                    url: "Page2".into(),
                    selected: true,
                },
                PageLink {
                    page: 3,
                    url: "Page3".into(),
                    selected: false,
                },
            ]
        );
    }

    #[test]
    fn test_no_links_without_items() {
        assert!(PagingInfo::new(1, 10, 0).page_links(|i| i.to_string()).is_empty());
    }
}
