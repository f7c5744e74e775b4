//! Category menu command.

use anyhow::Result;

use super::CategoriesArgs;
use crate::context::Context;
use crate::output::selected_marker;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront().await?;
    let menu = store.menu(args.selected.as_deref())?;

    if ctx.output.is_json() {
        ctx.output.json(&menu);
        return Ok(());
    }

    ctx.output.header("Categories");
    if menu.categories.is_empty() {
        ctx.output.info("The catalog has no categories yet.");
        return Ok(());
    }

    for (category, selected) in menu.entries() {
        ctx.output.list_item(&selected_marker(category, selected));
    }

    if let Some(selected) = &args.selected {
        if !menu.categories.contains(selected) {
            ctx.output.warn(&format!("No products are in category '{}'", selected));
        }
    }

    Ok(())
}
