//! Shopper-facing catalog service.

use crate::catalog::{CategoryMenu, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::repository::ProductRepository;
use crate::search::{self, CatalogPage, DEFAULT_PAGE_SIZE};
use store_observability::StructuredLogger;

/// Lists, searches, and navigates the catalog held by a repository.
///
/// The page size is fixed when the storefront is built and passed
/// explicitly to every listing.
#[derive(Debug)]
pub struct Storefront<R> {
    repository: R,
    page_size: i64,
    logger: Option<StructuredLogger>,
}

impl<R: ProductRepository> Storefront<R> {
    /// Create a storefront with the default page size.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            page_size: DEFAULT_PAGE_SIZE,
            logger: None,
        }
    }

    /// Set the number of products per page.
    pub fn with_page_size(mut self, page_size: i64) -> Result<Self, CommerceError> {
        if page_size < 1 {
            return Err(CommerceError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = Some(logger.for_component("storefront"));
        self
    }

    /// Products per page.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// One page of the catalog, optionally restricted to a category.
    pub fn list(&self, category: Option<&str>, page: i64) -> Result<CatalogPage, CommerceError> {
        let products = self.repository.products()?;
        let result = search::list_page(&products, category, page, self.page_size)?;

        if let Some(logger) = &self.logger {
            logger
                .debug_builder("listed catalog page")
                .field("category", category)
                .field("page", page)
                .field("total_items", result.paging.total_items)
                .emit();
        }
        Ok(result)
    }

    /// Products whose name contains `term`.
    pub fn search(&self, term: Option<&str>) -> Result<Vec<Product>, CommerceError> {
        let products = self.repository.products()?;
        let found = search::search(&products, term);

        if let Some(logger) = &self.logger {
            logger
                .debug_builder("searched catalog")
                .field("term", term)
                .field("matches", found.len() as i64)
                .emit();
        }
        Ok(found)
    }

    /// The category menu with `selected` marked.
    pub fn menu(&self, selected: Option<&str>) -> Result<CategoryMenu, CommerceError> {
        let products = self.repository.products()?;
        Ok(CategoryMenu::build(&products, selected))
    }

    /// Look up a product to put in a cart.
    pub fn product(&self, id: ProductId) -> Result<Product, CommerceError> {
        self.repository
            .find(id)?
            .ok_or(CommerceError::ProductNotFound(id.get()))
    }
}
