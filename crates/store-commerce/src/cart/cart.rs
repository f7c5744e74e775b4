//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Lines are kept in the order their product was first added. Lines are
/// matched by product id, so two copies of the same catalog product share
/// one line.
///
/// Deserialized carts are rebuilt line by line through [`Cart::add_item`],
/// so a stored cart is held to the same quantity and currency rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "StoredCart")]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The product is priced in another currency
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    ///
    /// The cart is unchanged when an error is returned.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            check_limit(new_quantity)?;
            existing.quantity = new_quantity;
            return Ok(());
        }

        check_limit(quantity)?;
        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove_line(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Sum of price times quantity over all lines.
    pub fn compute_total_value(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::zero(self.currency), |total, line| {
            let line_total = line.total()?;
            total.try_add(&line_total).ok_or(CommerceError::Overflow)
        })
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The current lines, in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart fields as they appear in serialized form, before validation.
#[derive(Deserialize)]
struct StoredCart {
    lines: Vec<CartLine>,
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<StoredCart> for Cart {
    type Error = CommerceError;

    fn try_from(stored: StoredCart) -> Result<Self, Self::Error> {
        let mut cart = Cart::new(stored.currency);
        for line in &stored.lines {
            cart.add_item(&line.product, line.quantity)?;
        }
        Ok(cart)
    }
}

fn check_limit(quantity: i64) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(())
}

/// A product and how many units of it are in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product: Product,
    /// Quantity.
    pub quantity: i64,
}

impl CartLine {
    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
