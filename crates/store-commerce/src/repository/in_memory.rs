//! In-memory product repository.

use super::{check_unique_ids, remove, upsert, ProductRepository, RepositoryError};
use crate::catalog::Product;
use crate::ids::ProductId;

/// A repository holding products in a vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `products`.
    pub fn with_products(products: Vec<Product>) -> Result<Self, RepositoryError> {
        check_unique_ids(&products)?;
        Ok(Self { products })
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    fn save_product(&mut self, product: Product) -> Result<Product, RepositoryError> {
        upsert(&mut self.products, product)
    }

    fn delete_product(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(remove(&mut self.products, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn game(id: i64, name: &str) -> Product {
        Product::new(id, name, Money::new(1000, Currency::UAH))
    }

    #[test]
    fn test_save_assigns_next_id() {
        let mut repo =
            InMemoryProductRepository::with_products(vec![game(1, "A"), game(7, "B")]).unwrap();

        let stored = repo.save_product(Product::blank(Currency::UAH)).unwrap();
        assert_eq!(stored.id, ProductId::new(8));
        assert_eq!(repo.products().unwrap().len(), 3);
    }

    #[test]
    fn test_save_first_product_gets_id_one() {
        let mut repo = InMemoryProductRepository::new();
        let stored = repo.save_product(Product::blank(Currency::UAH)).unwrap();
        assert_eq!(stored.id, ProductId::new(1));
    }

    #[test]
    fn test_negative_ids_never_yield_unassigned() {
        let mut repo = InMemoryProductRepository::with_products(vec![game(-1, "Neg")]).unwrap();

        let stored = repo.save_product(Product::blank(Currency::UAH)).unwrap();
        assert_eq!(stored.id, ProductId::new(1));
        assert!(stored.id.is_assigned());

        let mut renamed = stored.clone();
        renamed.name = "Renamed".to_string();
        repo.save_product(renamed).unwrap();

        let ids: Vec<i64> = repo.products().unwrap().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![-1, 1]);
    }

    #[test]
    fn test_exhausted_ids_are_an_error() {
        let mut repo =
            InMemoryProductRepository::with_products(vec![game(i64::MAX, "Last")]).unwrap();

        let result = repo.save_product(Product::blank(Currency::UAH));
        assert!(matches!(result, Err(RepositoryError::IdsExhausted(i64::MAX))));
        assert_eq!(repo.products().unwrap().len(), 1);
    }

    #[test]
    fn test_save_replaces_by_id() {
        let mut repo = InMemoryProductRepository::with_products(vec![game(1, "Old")]).unwrap();

        repo.save_product(game(1, "New")).unwrap();

        let products = repo.products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "New");
    }

    #[test]
    fn test_delete_returns_removed_product() {
        let mut repo =
            InMemoryProductRepository::with_products(vec![game(1, "A"), game(2, "B")]).unwrap();

        let removed = repo.delete_product(ProductId::new(2)).unwrap();
        assert_eq!(removed.map(|p| p.name), Some("B".to_string()));
        assert!(repo.delete_product(ProductId::new(2)).unwrap().is_none());
        assert_eq!(repo.products().unwrap().len(), 1);
    }

    #[test]
    fn test_find() {
        let repo = InMemoryProductRepository::with_products(vec![game(3, "C")]).unwrap();
        assert_eq!(repo.find(ProductId::new(3)).unwrap().unwrap().name, "C");
        assert!(repo.find(ProductId::new(4)).unwrap().is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = InMemoryProductRepository::with_products(vec![game(1, "A"), game(1, "B")]);
        assert!(matches!(result, Err(RepositoryError::DuplicateId(1))));
    }
}
