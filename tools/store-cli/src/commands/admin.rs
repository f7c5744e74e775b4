//! Catalog administration commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use store_commerce::prelude::*;

use super::{AdminArgs, AdminCommand, ProductFields};
use crate::context::Context;
use crate::output::format_price;

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::List => list(ctx).await,
        AdminCommand::Show { id } => show(id, ctx).await,
        AdminCommand::Create { fields } => create(fields, ctx).await,
        AdminCommand::Edit { id, fields } => edit(id, fields, ctx).await,
        AdminCommand::Delete { id, yes } => delete(id, yes, ctx).await,
    }
}

async fn list(ctx: &Context) -> Result<()> {
    let admin = ctx.admin().await?;
    let products = admin.index()?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("All products");
    if products.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }
    super::products::print_table(&products, ctx);
    Ok(())
}

async fn show(id: i64, ctx: &Context) -> Result<()> {
    let admin = ctx.admin().await?;
    let Some(product) = admin.edit(ProductId::new(id))? else {
        bail!(CommerceError::ProductNotFound(id));
    };
    print_product(&product, ctx);
    Ok(())
}

async fn create(fields: ProductFields, ctx: &Context) -> Result<()> {
    let mut admin = ctx.admin().await?;
    if fields.name.is_none() {
        bail!("--name is required when creating a product");
    }

    let product = apply(admin.create(), fields, ctx.config.store.currency)?;
    let (stored, message) = admin.save(product)?;

    ctx.output.success(&message);
    print_product(&stored, ctx);
    Ok(())
}

async fn edit(id: i64, fields: ProductFields, ctx: &Context) -> Result<()> {
    let mut admin = ctx.admin().await?;
    let Some(product) = admin.edit(ProductId::new(id))? else {
        bail!(CommerceError::ProductNotFound(id));
    };

    let product = apply(product, fields, ctx.config.store.currency)?;
    let (stored, message) = admin.save(product)?;

    ctx.output.success(&message);
    print_product(&stored, ctx);
    Ok(())
}

async fn delete(id: i64, yes: bool, ctx: &Context) -> Result<()> {
    let mut admin = ctx.admin().await?;
    let Some(product) = admin.edit(ProductId::new(id))? else {
        ctx.output.warn(&format!("Product {} does not exist", id));
        return Ok(());
    };

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", product.name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Delete cancelled");
            return Ok(());
        }
    }

    match admin.delete(product.id)? {
        Some(message) => ctx.output.success(&message),
        None => ctx.output.warn(&format!("Product {} does not exist", id)),
    }
    Ok(())
}

/// Overlay the given fields on `product`.
fn apply(mut product: Product, fields: ProductFields, currency: Currency) -> Result<Product> {
    if let Some(name) = fields.name {
        product.name = name;
    }
    if let Some(description) = fields.description {
        product.description = description;
    }
    if let Some(category) = fields.category {
        product = product.with_category(category);
    }
    if let Some(price) = fields.price {
        product.price = Money::parse(&price, currency)?;
    }
    Ok(product)
}

fn print_product(product: &Product, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(product);
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Category", product.category.as_deref().unwrap_or("-"));
    ctx.output.kv("Price", &format_price(&product.price));
    if !product.description.is_empty() {
        ctx.output.kv("Description", &product.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProductFields {
        ProductFields::default()
    }

    #[test]
    fn test_apply_overlays_only_given_fields() {
        let original = Product::new(3, "Doom", Money::new(49900, Currency::UAH))
            .with_category("Shooter")
            .with_description("Classic");

        let updated = apply(
            original.clone(),
            ProductFields {
                price: Some("399.50".to_string()),
                ..fields()
            },
            Currency::UAH,
        )
        .unwrap();

        assert_eq!(updated.name, "Doom");
        assert_eq!(updated.description, "Classic");
        assert_eq!(updated.category.as_deref(), Some("Shooter"));
        assert_eq!(updated.price, Money::new(39950, Currency::UAH));
    }

    #[test]
    fn test_apply_empty_category_uncategorizes() {
        let original =
            Product::new(3, "Doom", Money::new(100, Currency::UAH)).with_category("Shooter");
        let updated = apply(
            original,
            ProductFields {
                category: Some(String::new()),
                ..fields()
            },
            Currency::UAH,
        )
        .unwrap();
        assert_eq!(updated.category, None);
    }

    #[test]
    fn test_apply_rejects_bad_price() {
        let result = apply(
            Product::blank(Currency::UAH),
            ProductFields {
                price: Some("12.345".to_string()),
                ..fields()
            },
            Currency::UAH,
        );
        assert!(result.is_err());
    }
}
