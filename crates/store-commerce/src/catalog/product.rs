//! Product type.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Product {
    /// Unique product identifier, assigned by the repository.
    #[serde(default)]
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Category name; `None` for uncategorized products.
    #[serde(default, deserialize_with = "non_empty_category")]
    pub category: Option<String>,
    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Create a new uncategorized product.
    pub fn new(id: i64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            category: None,
            price,
        }
    }

    /// A blank product the repository will assign an id to on save.
    pub fn blank(currency: Currency) -> Self {
        Self::new(ProductId::UNASSIGNED.get(), "", Money::zero(currency))
    }

    /// Set the category. An empty name leaves the product uncategorized.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize_category(category.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check whether the product belongs to `category` (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

fn normalize_category(category: String) -> Option<String> {
    if category.is_empty() {
        None
    } else {
        Some(category)
    }
}

fn non_empty_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(normalize_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let p = Product::new(1, "Doom", Money::new(19900, Currency::UAH))
            .with_category("Shooter")
            .with_description("Rip and tear");

        assert_eq!(p.id, ProductId::new(1));
        assert!(p.in_category("Shooter"));
        assert!(!p.in_category("shooter"));
        assert_eq!(p.description, "Rip and tear");
    }

    #[test]
    fn test_empty_category_is_uncategorized() {
        let p = Product::new(1, "Tetris", Money::zero(Currency::UAH)).with_category("");
        assert_eq!(p.category, None);
    }

    #[test]
    fn test_deserialize_normalizes_category() {
        let json = r#"{"id": 3, "name": "Myst", "category": "", "price": {"amount_cents": 500, "currency": "UAH"}}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, None);
        assert_eq!(p.description, "");
        assert_eq!(p.id, ProductId::new(3));
    }

    #[test]
    fn test_blank_product() {
        let p = Product::blank(Currency::EUR);
        assert!(!p.id.is_assigned());
        assert!(p.price.is_zero());
        assert_eq!(p.price.currency, Currency::EUR);
    }
}
