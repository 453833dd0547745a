//! List the catalog's categories.

use anyhow::Result;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let categories = catalog.list_categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        let count = catalog.filter_by_category(category).len();
        ctx.output.list_item(&format!("{category} ({count})"));
    }

    Ok(())
}
