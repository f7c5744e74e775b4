//! End-to-end flows over the public API: browse, fill a cart, maintain the
//! catalog.

use store_commerce::prelude::*;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Game1", Money::new(10000, Currency::UAH)).with_category("Cat1"),
        Product::new(2, "Game2", Money::new(5500, Currency::UAH)).with_category("Cat2"),
        Product::new(3, "Game3", Money::new(2000, Currency::UAH)).with_category("Cat1"),
        Product::new(4, "Game4", Money::new(3000, Currency::UAH)).with_category("Cat2"),
        Product::new(5, "Game5", Money::new(4000, Currency::UAH)).with_category("Cat3"),
    ]
}

#[test]
fn browse_then_buy() {
    let repo = InMemoryProductRepository::with_products(catalog()).unwrap();
    let store = Storefront::new(repo).with_page_size(3).unwrap();

    let page = store.list(None, 2).unwrap();
    assert_eq!(page.paging, PagingInfo::new(2, 3, 5));
    assert_eq!(page.paging.total_pages(), 2);
    assert_eq!(
        page.products.iter().map(|p| p.id.get()).collect::<Vec<_>>(),
        vec![4, 5]
    );

    let links = page.paging.page_links(|n| format!("/page{}", n));
    assert_eq!(links.iter().filter(|l| l.selected).count(), 1);
    assert!(links[1].selected);

    let sessions = CartSessions::new(Currency::UAH);
    let shopper = SessionId::new("shopper");
    let p1 = store.product(ProductId::new(1)).unwrap();
    let p2 = store.product(ProductId::new(2)).unwrap();

    sessions.with_cart(&shopper, |c| c.add_item(&p1, 1)).unwrap();
    sessions.with_cart(&shopper, |c| c.add_item(&p2, 1)).unwrap();
    sessions.with_cart(&shopper, |c| c.add_item(&p1, 5)).unwrap();

    let total = sessions
        .with_cart(&shopper, |c| c.compute_total_value())
        .unwrap();
    assert_eq!(total, Money::new(65500, Currency::UAH));

    sessions.with_cart(&shopper, |c| {
        c.clear();
        Ok(())
    })
    .unwrap();
    let cart = sessions.get(&shopper).unwrap().unwrap();
    assert!(cart.lines().is_empty());
    assert!(cart.compute_total_value().unwrap().is_zero());
}

#[test]
fn category_navigation() {
    let repo = InMemoryProductRepository::with_products(catalog()).unwrap();
    let store = Storefront::new(repo).with_page_size(3).unwrap();

    let menu = store.menu(Some("Cat2")).unwrap();
    assert_eq!(menu.categories, vec!["Cat1", "Cat2", "Cat3"]);

    for category in &menu.categories {
        let page = store.list(Some(category.as_str()), 1).unwrap();
        assert_eq!(page.current_category.as_deref(), Some(category.as_str()));
        assert!(page.products.iter().all(|p| p.in_category(category)));
    }

    let selected: Vec<_> = menu.entries().filter(|(_, s)| *s).map(|(c, _)| c).collect();
    assert_eq!(selected, vec!["Cat2"]);
}

#[test]
fn admin_changes_are_visible_to_shoppers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let mut admin = Admin::new(JsonFileRepository::open(&path).unwrap(), Currency::UAH);
    for product in catalog() {
        admin.save(product).unwrap();
    }

    let mut fresh = admin.create().with_category("Cat4");
    fresh.name = "Game6".to_string();
    fresh.price = Money::parse("19.99", Currency::UAH).unwrap();
    let (stored, _) = admin.save(fresh).unwrap();
    assert_eq!(stored.id, ProductId::new(6));

    assert!(admin.delete(ProductId::new(2)).unwrap().is_some());

    let store = Storefront::new(JsonFileRepository::open(&path).unwrap());
    let menu = store.menu(None).unwrap();
    assert_eq!(menu.categories, vec!["Cat1", "Cat2", "Cat3", "Cat4"]);

    let cat2 = store.list(Some("Cat2"), 1).unwrap();
    assert_eq!(cat2.paging.total_items, 1);

    let found = store.search(Some("Game6")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].price.amount_cents, 1999);
}

#[test]
fn invalid_paging_is_an_invalid_argument() {
    let repo = InMemoryProductRepository::with_products(catalog()).unwrap();
    let store = Storefront::new(repo);

    let err = store.list(None, 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(!CommerceError::Overflow.is_invalid_argument());
}
