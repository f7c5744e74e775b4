//! Product catalog module.
//!
//! Contains the product type and the category menu.

mod menu;
mod product;

pub use menu::{is_selected, list_categories, CategoryMenu};
pub use product::Product;
