//! Back-office order management.

use anyhow::{bail, Result};
use eleora_commerce::checkout::OrderStatus;
use eleora_commerce::ids::OrderId;
use eleora_commerce::money::format_currency;
use eleora_store::OrderStore;

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::{format_timestamp, price_cell, status_badge};

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        OrdersCommand::List => list(ctx),
        OrdersCommand::Show { id } => show(&id, ctx),
        OrdersCommand::SetStatus { id, status } => set_status(&id, &status, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let orders = ctx.orders().list()?;

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header("Orders");
    ctx.output.table_row(
        &["ID", "PLACED", "CUSTOMER", "TOTAL", "STATUS", "PAYMENT"],
        &[16, 20, 20, 10, 12, 10],
    );
    for order in &orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &format_timestamp(order.created_at),
                &order.customer.full_name,
                &price_cell(order.total_amount),
                &status_badge(order.status.as_str()),
                &status_badge(order.payment_status.as_str()),
            ],
            &[16, 20, 20, 10, 12, 10],
        );
    }
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} order(s)", orders.len()));
    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let Some(order) = ctx.orders().get(&OrderId::new(id))? else {
        bail!("Order '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("Placed", &format_timestamp(order.created_at));
    ctx.output.kv("Customer", &order.customer.full_name);
    ctx.output.kv("Email", &order.customer.email);
    ctx.output.kv("Mobile", &order.customer.mobile);
    ctx.output.kv("Ships to", &order.shipping_address);
    if let Some(user_id) = &order.user_id {
        ctx.output.kv("User", user_id);
    }
    ctx.output.kv("Status", &status_badge(order.status.as_str()));
    ctx.output.kv(
        "Payment",
        &format!(
            "{} ({})",
            status_badge(order.payment_status.as_str()),
            order.payment_method.as_str()
        ),
    );
    if let Some(notes) = &order.notes {
        ctx.output.kv("Notes", notes);
    }

    ctx.output.info("");
    for item in &order.items {
        ctx.output.list_item(&format!(
            "{} ({}) x {}  {}",
            item.product_name,
            item.size,
            item.quantity,
            format_currency(Some(item.total_price))
        ));
    }
    ctx.output.kv("Total", &format_currency(Some(order.total_amount)));
    Ok(())
}

fn set_status(id: &str, status: &str, ctx: &Context) -> Result<()> {
    let Some(status) = OrderStatus::from_str(status) else {
        bail!(
            "Unknown status '{}'. Statuses: pending, processing, shipped, delivered, cancelled",
            status
        );
    };

    ctx.orders().set_status(&OrderId::new(id), status)?;
    ctx.output
        .success(&format!("Order '{}' is now {}", id, status.display_name()));
    Ok(())
}
