//! Shopping cart commands.

use anyhow::Result;
use serde_json::json;
use store_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::{format_price, truncate};

const WIDTHS: [usize; 4] = [6, 32, 6, 16];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let session = SessionId::new(args.session);
    let sessions = CartSessions::new(ctx.config.store.currency);
    ctx.load_cart(&sessions, &session).await?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add {
            product_id,
            quantity,
        } => {
            let store = ctx.storefront().await?;
            let product = store.product(ProductId::new(product_id))?;
            sessions.with_cart(&session, |cart| cart.add_item(&product, quantity))?;
            ctx.save_cart(&sessions, &session).await?;
            ctx.output.success(&format!("Added {} x \"{}\" to the cart", quantity, product.name));
        }
        CartCommand::Remove { product_id } => {
            let id = ProductId::new(product_id);
            let removed = sessions.with_cart(&session, |cart| Ok(cart.remove_line(id)))?;
            if removed {
                ctx.save_cart(&sessions, &session).await?;
                ctx.output.success(&format!("Removed product {} from the cart", id));
            } else {
                ctx.output.warn(&format!("Product {} is not in the cart", id));
            }
        }
        CartCommand::Clear => {
            sessions.with_cart(&session, |cart| {
                cart.clear();
                Ok(())
            })?;
            ctx.save_cart(&sessions, &session).await?;
            ctx.output.success("Cart cleared");
        }
    }

    let cart = sessions
        .get(&session)?
        .unwrap_or_else(|| Cart::new(ctx.config.store.currency));
    show(&session, &cart, ctx)
}

fn show(session: &SessionId, cart: &Cart, ctx: &Context) -> Result<()> {
    let total = cart.compute_total_value()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "session": session,
            "lines": cart.lines(),
            "item_count": cart.item_count(),
            "total": total,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({})", session));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "NAME", "QTY", "SUBTOTAL"], &WIDTHS);
    for line in cart.lines() {
        let id = line.product.id.to_string();
        let name = truncate(&line.product.name, WIDTHS[1]);
        let quantity = line.quantity.to_string();
        let subtotal = format_price(&line.total()?);
        ctx.output.table_row(&[&id, &name, &quantity, &subtotal], &WIDTHS);
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &total.display());
    Ok(())
}
