//! Catalog, cart, and admin logic for the GameStore storefront.
//!
//! - **Catalog**: Products and the category menu
//! - **Search**: Category-filtered pagination and name search
//! - **Cart**: Shopping cart with line items and per-session storage
//! - **Repository**: Product persistence (in memory or a JSON file)
//! - **Storefront / Admin**: Services tying the above to a repository
//!
//! # Example
//!
//! ```
//! use store_commerce::prelude::*;
//!
//! let repo = InMemoryProductRepository::with_products(vec![
//!     Product::new(1, "Doom", Money::new(19900, Currency::UAH)).with_category("Shooter"),
//!     Product::new(2, "Civilization", Money::new(49900, Currency::UAH)).with_category("Strategy"),
//! ])
//! .unwrap();
//! let store = Storefront::new(repo);
//!
//! let page = store.list(Some("Shooter"), 1).unwrap();
//! assert_eq!(page.paging.total_items, 1);
//!
//! let mut cart = Cart::new(Currency::UAH);
//! cart.add_item(&page.products[0], 2).unwrap();
//! assert_eq!(cart.compute_total_value().unwrap().display_amount(), "398.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod repository;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::{ProductId, SessionId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{is_selected, list_categories, CategoryMenu, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSessions, MAX_QUANTITY_PER_ITEM};

    // Search
    pub use crate::search::{
        list_page, search, CatalogPage, CatalogQuery, PageLink, PagingInfo, DEFAULT_PAGE_SIZE,
    };

    // Persistence and services
    pub use crate::admin::Admin;
    pub use crate::repository::{
        InMemoryProductRepository, JsonFileRepository, ProductRepository, RepositoryError,
    };
    pub use crate::storefront::Storefront;
}
