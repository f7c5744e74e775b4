//! Catalog search module.
//!
//! Contains category-filtered pagination, name search, and page results.

mod query;
mod results;

pub use query::{list_page, search, CatalogQuery, DEFAULT_PAGE_SIZE};
pub use results::{CatalogPage, PageLink, PagingInfo};
