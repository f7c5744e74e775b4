//! Product repository stored as one JSON document on disk.

use super::{check_unique_ids, remove, upsert, ProductRepository, RepositoryError};
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout of the catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDocument {
    /// All products.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A repository backed by a JSON catalog file.
///
/// The file is read once on open and rewritten after every mutation.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    document: CatalogDocument,
}

impl JsonFileRepository {
    /// Open the catalog at `path`. A missing file is an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let document = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&content)?
        } else {
            CatalogDocument::default()
        };
        Ok(Self { path, document })
    }

    /// Build a repository from catalog text already read from `path`.
    pub fn from_contents(path: impl Into<PathBuf>, content: &str) -> Result<Self, RepositoryError> {
        Ok(Self {
            path: path.into(),
            document: Self::parse(content)?,
        })
    }

    /// Location of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the current catalog as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RepositoryError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    fn parse(content: &str) -> Result<CatalogDocument, RepositoryError> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        check_unique_ids(&document.products)?;
        Ok(document)
    }

    fn flush(&self) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, self.to_json()?)?;
        Ok(())
    }
}

impl ProductRepository for JsonFileRepository {
    fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.document.products.clone())
    }

    fn save_product(&mut self, product: Product) -> Result<Product, RepositoryError> {
        let stored = upsert(&mut self.document.products, product)?;
        self.flush()?;
        Ok(stored)
    }

    fn delete_product(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let removed = remove(&mut self.document.products, id);
        if removed.is_some() {
            self.flush()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("catalog.json")).unwrap();
        assert!(repo.products().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("catalog.json");

        let mut repo = JsonFileRepository::open(&path).unwrap();
        let stored = repo
            .save_product(
                Product::blank(Currency::UAH)
                    .with_category("RPG")
                    .with_description("Open world"),
            )
            .unwrap();
        repo.save_product(Product::new(5, "Quake", Money::new(9900, Currency::UAH)))
            .unwrap();

        let reopened = JsonFileRepository::open(&path).unwrap();
        let products = reopened.products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, stored.id);
        assert_eq!(products[0].category.as_deref(), Some("RPG"));

        let mut reopened = reopened;
        reopened.delete_product(ProductId::new(5)).unwrap();
        let again = JsonFileRepository::open(&path).unwrap();
        assert_eq!(again.products().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_contents() {
        let content = r#"{"products": [{"id": 1, "name": "Doom", "price": {"amount_cents": 100, "currency": "UAH"}}]}"#;
        let repo = JsonFileRepository::from_contents("catalog.json", content).unwrap();
        assert_eq!(repo.products().unwrap()[0].name, "Doom");
        assert_eq!(repo.path(), Path::new("catalog.json"));
    }
}
