//! Catalog browsing and back-office product management.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use eleora_commerce::catalog::{Product, SizePrices, SizeVariant};
use eleora_commerce::ids::ProductId;
use eleora_commerce::money::format_currency;
use eleora_store::ProductCatalog;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List { all } => list(all, ctx),
        ProductsCommand::Show { id } => show(&id, ctx),
        ProductsCommand::Add => add(ctx),
        ProductsCommand::Deactivate { id } => set_active(&id, false, ctx),
        ProductsCommand::Activate { id } => set_active(&id, true, ctx),
    }
}

fn list(all: bool, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let products = if all {
        catalog.list_all()?
    } else {
        catalog.list_active()?
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products in the catalog.");
        ctx.output.info("Run `eleora products add` to create one.");
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output
        .table_row(&["ID", "NAME", "FROM", "ACTIVE"], &[16, 30, 10, 6]);
    for product in &products {
        let from = SizeVariant::ALL
            .iter()
            .map(|s| product.price_for(*s))
            .filter(|p| *p > 0.0)
            .fold(f64::INFINITY, f64::min);
        let from = if from.is_finite() {
            format_currency(Some(from))
        } else {
            "-".to_string()
        };
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.short_name,
                &from,
                if product.is_active { "yes" } else { "no" },
            ],
            &[16, 30, 10, 6],
        );
    }
    ctx.output.info("");
    ctx.output
        .info(&format!("Total: {} product(s)", products.len()));
    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.catalog().get(&ProductId::new(id))? else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Short name", &product.short_name);
    if !product.description.is_empty() {
        ctx.output.kv("Description", &product.description);
    }
    if !product.use_case.is_empty() {
        ctx.output.kv("Use", &product.use_case);
    }
    ctx.output
        .kv("Active", if product.is_active { "yes" } else { "no" });

    ctx.output.info("");
    for size in SizeVariant::ALL {
        ctx.output.kv(
            size.as_str(),
            &format_currency(Some(product.price_for(size))),
        );
    }

    if !product.highlights.is_empty() {
        ctx.output.info("");
        for highlight in &product.highlights {
            ctx.output.list_item(highlight);
        }
    }
    Ok(())
}

fn add(ctx: &Context) -> Result<()> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let short_name: String = Input::new()
        .with_prompt("Short name")
        .default(name.clone())
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let use_case: String = Input::new()
        .with_prompt("Suggested use")
        .allow_empty(true)
        .interact_text()?;
    let image_url: String = Input::new()
        .with_prompt("Image URL")
        .allow_empty(true)
        .interact_text()?;

    let mut prices = SizePrices::default();
    for size in SizeVariant::ALL {
        let price: f64 = Input::new()
            .with_prompt(format!("Price for {}", size))
            .interact_text()?;
        prices.set(size, price);
    }

    let highlights: String = Input::new()
        .with_prompt("Highlights (comma-separated)")
        .allow_empty(true)
        .interact_text()?;

    let mut product = Product::new(ProductId::generate(), name, short_name, prices);
    product.description = description;
    product.use_case = use_case;
    product.image_url = image_url;
    product.highlights = highlights
        .split(',')
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();

    ctx.catalog().upsert(product.clone())?;
    ctx.output
        .success(&format!("Added '{}' ({})", product.short_name, product.id));
    Ok(())
}

fn set_active(id: &str, active: bool, ctx: &Context) -> Result<()> {
    let product_id = ProductId::new(id);
    if !active {
        let confirmed = Confirm::new()
            .with_prompt(format!("Hide product '{}' from the storefront?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    ctx.catalog().set_active(&product_id, active)?;
    ctx.output.success(&format!(
        "Product '{}' is now {}",
        id,
        if active { "active" } else { "hidden" }
    ));
    Ok(())
}
