//! Product persistence.
//!
//! The storefront only needs the whole product collection plus upsert and
//! delete. [`InMemoryProductRepository`] backs tests and embedded use;
//! [`JsonFileRepository`] keeps the catalog in a single JSON document.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryProductRepository;
pub use json_file::{CatalogDocument, JsonFileRepository};

use crate::catalog::Product;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised by a product repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Reading or writing the backing store failed.
    #[error("Repository I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store holds malformed data.
    #[error("Repository serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Two products share one id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(i64),

    /// No id above the current maximum is left to assign.
    #[error("No product id left to assign after {0}")]
    IdsExhausted(i64),
}

/// Source and sink of catalog products.
pub trait ProductRepository {
    /// Every product in the catalog.
    fn products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Insert or replace a product by id.
    ///
    /// A product with an unassigned id is given the next free id. Returns
    /// the product as stored.
    fn save_product(&mut self, product: Product) -> Result<Product, RepositoryError>;

    /// Delete a product, returning it if it existed.
    fn delete_product(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Look up a single product.
    fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products()?.into_iter().find(|p| p.id == id))
    }
}

/// Upsert `product` into `products`, assigning an id when needed.
///
/// Assigned ids are always positive, even when every stored id is negative.
fn upsert(products: &mut Vec<Product>, mut product: Product) -> Result<Product, RepositoryError> {
    if !product.id.is_assigned() {
        let highest = products.iter().map(|p| p.id.get()).max().unwrap_or(0).max(0);
        let next = highest
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted(highest))?;
        product.id = ProductId::new(next);
    }

    match products.iter_mut().find(|p| p.id == product.id) {
        Some(existing) => *existing = product.clone(),
        None => products.push(product.clone()),
    }
    Ok(product)
}

/// Remove the product with `id` from `products`.
fn remove(products: &mut Vec<Product>, id: ProductId) -> Option<Product> {
    let index = products.iter().position(|p| p.id == id)?;
    Some(products.remove(index))
}

/// Reject collections where two products share an id.
fn check_unique_ids(products: &[Product]) -> Result<(), RepositoryError> {
    let mut seen = std::collections::HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(RepositoryError::DuplicateId(product.id.get()));
        }
    }
    Ok(())
}
