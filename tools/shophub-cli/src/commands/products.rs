//! List the catalog.

use anyhow::Result;
use shophub_commerce::catalog::ALL_CATEGORIES;

use super::ProductsArgs;
use crate::context::Context;
use crate::render::product_row;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let category = args.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let products = catalog.filter_by_category(category);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({category})"));
    if products.is_empty() {
        ctx.output.warn(&format!("No products in \"{category}\""));
        return Ok(());
    }
    for product in &products {
        ctx.output.line(&product_row(product));
        if ctx.output.is_verbose() && !product.description.is_empty() {
            ctx.output.kv("description", &product.description);
        }
    }

    Ok(())
}
