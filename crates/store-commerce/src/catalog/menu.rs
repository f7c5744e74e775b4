//! Category navigation menu.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The navigable list of categories with the active one marked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CategoryMenu {
    /// Distinct category names, ascending.
    pub categories: Vec<String>,
    /// The category the shopper is currently browsing.
    pub selected: Option<String>,
}

impl CategoryMenu {
    /// Build the menu from the full product collection.
    pub fn build(products: &[Product], selected: Option<&str>) -> Self {
        Self {
            categories: list_categories(products),
            selected: selected.map(str::to_string),
        }
    }

    /// Check whether `category` is the active entry.
    pub fn is_selected(&self, category: &str) -> bool {
        is_selected(category, self.selected.as_deref())
    }

    /// Iterate entries paired with their selected flag.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.categories
            .iter()
            .map(move |c| (c.as_str(), self.is_selected(c)))
    }
}

/// Distinct categories across `products`, sorted ascending.
///
/// Uncategorized products contribute no entry.
pub fn list_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter_map(|p| p.category.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Whether `category` equals the currently selected category.
pub fn is_selected(category: &str, selected: Option<&str>) -> bool {
    selected == Some(category)
}
