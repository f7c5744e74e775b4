//! Catalog browsing commands.

use anyhow::Result;
use store_commerce::catalog::Product;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{format_price, selected_marker, truncate};

const WIDTHS: [usize; 4] = [6, 32, 16, 14];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List { category, page } => list(category.as_deref(), page, ctx).await,
        ProductsCommand::Search { term } => search(term.as_deref(), ctx).await,
    }
}

async fn list(category: Option<&str>, page: i64, ctx: &Context) -> Result<()> {
    let store = ctx.storefront().await?;
    let result = store.list(category, page)?;

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    let title = match category {
        Some(c) => format!("{}: {}", ctx.config.store.name, c),
        None => ctx.config.store.name.clone(),
    };
    ctx.output.header(&title);

    if result.is_empty() {
        ctx.output.info("No products on this page.");
    } else {
        print_table(&result.products, ctx);
    }

    let paging = result.paging;
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} product(s)",
        paging.start_item(),
        paging.end_item(),
        paging.total_items
    ));

    let links: Vec<String> = paging
        .page_links(|n| n.to_string())
        .iter()
        .map(|link| selected_marker(&link.url, link.selected))
        .collect();
    if !links.is_empty() {
        ctx.output.kv("Pages", &links.join(" "));
    }

    Ok(())
}

async fn search(term: Option<&str>, ctx: &Context) -> Result<()> {
    let store = ctx.storefront().await?;
    let found = store.search(term)?;

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    match term {
        Some(t) => ctx.output.header(&format!("Products matching \"{}\"", t)),
        None => ctx.output.header("All products"),
    }

    if found.is_empty() {
        ctx.output.info("Nothing found.");
        return Ok(());
    }

    print_table(&found, ctx);
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", found.len()));
    Ok(())
}

/// Print products as an id/name/category/price table.
pub fn print_table(products: &[Product], ctx: &Context) {
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &WIDTHS);
    for p in products {
        let id = p.id.to_string();
        let name = truncate(&p.name, WIDTHS[1]);
        let category = truncate(p.category.as_deref().unwrap_or("-"), WIDTHS[2]);
        let price = format_price(&p.price);
        ctx.output.table_row(&[&id, &name, &category, &price], &WIDTHS);
    }
}
