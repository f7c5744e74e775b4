//! Administrative product maintenance.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::repository::ProductRepository;
use store_observability::StructuredLogger;

/// Create, edit, and delete catalog products.
#[derive(Debug)]
pub struct Admin<R> {
    repository: R,
    currency: Currency,
    logger: Option<StructuredLogger>,
}

impl<R: ProductRepository> Admin<R> {
    /// Create an admin service; new products are priced in `currency`.
    pub fn new(repository: R, currency: Currency) -> Self {
        Self {
            repository,
            currency,
            logger: None,
        }
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = Some(logger.for_component("admin"));
        self
    }

    /// All products.
    pub fn index(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.repository.products()?)
    }

    /// The product to edit, if it exists.
    pub fn edit(&self, id: ProductId) -> Result<Option<Product>, CommerceError> {
        Ok(self.repository.find(id)?)
    }

    /// A blank product for the create form.
    pub fn create(&self) -> Product {
        Product::blank(self.currency)
    }

    /// Validate and store `product`, returning the confirmation message.
    pub fn save(&mut self, product: Product) -> Result<(Product, String), CommerceError> {
        validate(&product, self.currency)?;

        let stored = self.repository.save_product(product)?;
        let message = format!("Changes to \"{}\" were saved", stored.name);

        if let Some(logger) = &self.logger {
            logger
                .info_builder("product saved")
                .field("product_id", stored.id.get())
                .field("name", stored.name.as_str())
                .emit();
        }
        Ok((stored, message))
    }

    /// Delete a product; returns a confirmation message if one was removed.
    pub fn delete(&mut self, id: ProductId) -> Result<Option<String>, CommerceError> {
        let removed = self.repository.delete_product(id)?;

        if let Some(logger) = &self.logger {
            logger
                .info_builder("product delete requested")
                .field("product_id", id.get())
                .field("removed", removed.is_some())
                .emit();
        }
        Ok(removed.map(|p| format!("\"{}\" was deleted", p.name)))
    }
}

fn validate(product: &Product, currency: Currency) -> Result<(), CommerceError> {
    if product.name.trim().is_empty() {
        return Err(CommerceError::ValidationError(
            "product name is required".to_string(),
        ));
    }
    if product.price.is_negative() {
        return Err(CommerceError::ValidationError(format!(
            "price of \"{}\" must not be negative",
            product.name
        )));
    }
    if product.price.currency != currency {
        return Err(CommerceError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: product.price.currency.code().to_string(),
        });
    }
    Ok(())
}
