//! Cart operations.
//!
//! Every mutation saves through the slot before reporting success, so the
//! cart a shopper sees next session is the cart they left.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use eleora_commerce::cart::LineItem;
use eleora_commerce::catalog::SizeVariant;
use eleora_commerce::ids::ProductId;
use eleora_commerce::money::format_currency;
use eleora_store::ProductCatalog;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::price_cell;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Show => show(ctx),
        CartCommand::Add {
            product,
            size,
            quantity,
        } => add(&product, &size, quantity, ctx),
        CartCommand::Remove { product, size } => remove(&product, &size, ctx),
        CartCommand::SetQty {
            product,
            size,
            quantity,
        } => set_qty(&product, &size, quantity, ctx),
        CartCommand::Clear { yes } => clear(yes, ctx),
    }
}

fn parse_size(size: &str) -> Result<SizeVariant> {
    match SizeVariant::from_str(size) {
        Some(size) => Ok(size),
        None => bail!("Unknown size '{}'. Sizes: 50g, 100g, 200g, 500g", size),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.cart_slot().load();

    if ctx.output.is_json() {
        ctx.output.json(&cart.items());
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output
        .table_row(&["ITEM", "QTY", "UNIT", "TOTAL"], &[34, 4, 10, 10]);
    for line in cart.items() {
        let item = format!("{} ({})", line.product.short_name, line.size);
        ctx.output.table_row(
            &[
                &item,
                &line.quantity.to_string(),
                &price_cell(line.unit_price),
                &price_cell(line.line_total()),
            ],
            &[34, 4, 10, 10],
        );
    }
    ctx.output.info("");
    ctx.output.kv("Items", &cart.count().to_string());
    ctx.output.kv("Total", &format_currency(Some(cart.total())));
    Ok(())
}

fn add(product_id: &str, size: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let size = parse_size(size)?;
    let Some(product) = ctx.catalog().get(&ProductId::new(product_id))? else {
        bail!("Product '{}' not found", product_id);
    };
    if !product.is_available() {
        bail!("Product '{}' is not available", product_id);
    }

    let unit_price = product.price_for(size);
    if unit_price <= 0.0 {
        bail!(
            "'{}' has no price for {} and cannot be added",
            product.short_name,
            size
        );
    }
    // The engine trusts its callers on quantity; the clamp lives here.
    let quantity = quantity.max(1);

    let slot = ctx.cart_slot();
    let mut cart = slot.load();
    cart.add(LineItem::new(product.clone(), size, quantity, unit_price));
    slot.save(&cart)?;

    ctx.output.success(&format!(
        "Added {} x {} ({}), cart total {}",
        quantity,
        product.short_name,
        size,
        format_currency(Some(cart.total()))
    ));
    Ok(())
}

fn remove(product_id: &str, size: &str, ctx: &Context) -> Result<()> {
    let size = parse_size(size)?;
    let slot = ctx.cart_slot();
    let mut cart = slot.load();

    if cart.remove(&ProductId::new(product_id), size) {
        slot.save(&cart)?;
        ctx.output.success("Removed from cart");
    } else {
        ctx.output.info("That item is not in the cart.");
    }
    Ok(())
}

fn set_qty(product_id: &str, size: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let size = parse_size(size)?;
    let slot = ctx.cart_slot();
    let mut cart = slot.load();

    if cart.update_quantity(&ProductId::new(product_id), size, quantity) {
        slot.save(&cart)?;
        if quantity == 0 {
            ctx.output.success("Removed from cart");
        } else {
            ctx.output
                .success(&format!("Quantity set to {}", quantity));
        }
    } else {
        ctx.output.info("That item is not in the cart.");
    }
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let slot = ctx.cart_slot();
    let mut cart = slot.load();

    if cart.is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} item(s) from the cart?", cart.count()))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    cart.clear();
    slot.save(&cart)?;
    ctx.output.success("Cart emptied");
    Ok(())
}
