//! Catalog listing and name search.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{CatalogPage, PagingInfo};
use serde::{Deserialize, Serialize};

/// Default number of products per catalog page.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// A catalog listing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Only list products in this category.
    pub category: Option<String>,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query for the first page of the whole catalog.
    pub fn new() -> Self {
        Self {
            category: None,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set pagination. Values are validated when the query runs.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// Run the query against the full product collection.
    pub fn execute(&self, products: &[Product]) -> Result<CatalogPage, CommerceError> {
        list_page(products, self.category.as_deref(), self.page, self.per_page)
    }
}

/// Produce one page of the catalog, optionally filtered by category.
///
/// Eligible products are ordered by id. A page past the end is empty;
/// a page or page size below 1 is rejected.
pub fn list_page(
    products: &[Product],
    category: Option<&str>,
    page: i64,
    page_size: i64,
) -> Result<CatalogPage, CommerceError> {
    if page < 1 {
        return Err(CommerceError::InvalidPage(page));
    }
    if page_size < 1 {
        return Err(CommerceError::InvalidPageSize(page_size));
    }

    let mut eligible: Vec<&Product> = products
        .iter()
        .filter(|p| category.map_or(true, |c| p.in_category(c)))
        .collect();
    eligible.sort_by_key(|p| p.id);

    let total = eligible.len() as i64;
    let paging = PagingInfo::new(page, page_size, total);
    let skip = usize::try_from(paging.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);

    Ok(CatalogPage {
        products: eligible.into_iter().skip(skip).take(take).cloned().collect(),
        paging,
        current_category: category.map(str::to_string),
    })
}

/// Products whose name contains `term` (case-sensitive).
///
/// With no term the whole collection is returned unchanged.
pub fn search(products: &[Product], term: Option<&str>) -> Vec<Product> {
    match term {
        None => products.to_vec(),
        Some(term) => products
            .iter()
            .filter(|p| p.name.contains(term))
            .cloned()
            .collect(),
    }
}
