//! Checkout flow.
//!
//! Collects shipping details, places the order, and, per the storefront's
//! one hard rule, never touches the cart on a downstream failure.

use anyhow::{bail, Result};
use dialoguer::Input;
use eleora_checkout::{Checkout, CheckoutError};
use eleora_commerce::checkout::CustomerDetails;
use eleora_commerce::ids::OrderId;
use eleora_commerce::money::format_currency;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    if let Some(order_id) = args.confirm {
        return confirm_payment(&order_id, ctx);
    }

    if !args.cod && !args.online {
        bail!("Choose a payment method: --cod or --online");
    }

    let slot = ctx.cart_slot();
    let cart = slot.load();

    // Empty cart: back to the cart view, nothing to check out.
    if cart.is_empty() {
        ctx.output.info("Your cart is empty, nothing to check out.");
        ctx.output.info("Browse `eleora products list` to get started.");
        return Ok(());
    }

    ctx.output.header("Order summary");
    for line in cart.items() {
        ctx.output.list_item(&format!(
            "{} ({}) x {}  {}",
            line.product.short_name,
            line.size,
            line.quantity,
            format_currency(Some(line.line_total()))
        ));
    }
    ctx.output
        .kv("Total", &format_currency(Some(cart.total())));

    let customer = prompt_customer()?;
    let orders = ctx.orders();
    let sessions = ctx.session_client();
    let checkout = Checkout::new(&orders, &sessions);

    if args.cod {
        let mut cart = cart;
        let order = checkout
            .place_cod_order(&mut cart, &slot, customer, ctx.user_id())
            .map_err(friendly)?;
        ctx.output.success(&format!(
            "Order {} placed. Pay {} on delivery",
            order.id,
            format_currency(Some(order.total_amount))
        ));
    } else if args.online {
        match checkout
            .begin_online_payment(&cart, customer, ctx.user_id())
            .await
        {
            Ok((order, url)) => {
                ctx.output
                    .success(&format!("Order {} created", order.id));
                ctx.output.kv("Pay here", &url);
                ctx.output.info(
                    "Your cart is kept until the payment is confirmed \
                     (`eleora checkout --confirm <order-id>`).",
                );
            }
            Err(e) => {
                // The cart and its slot are exactly as they were.
                ctx.output
                    .warn("Your cart has been kept; nothing was charged.");
                return Err(friendly(e));
            }
        }
    }

    Ok(())
}

fn confirm_payment(order_id: &str, ctx: &Context) -> Result<()> {
    let slot = ctx.cart_slot();
    let mut cart = slot.load();
    let orders = ctx.orders();
    let sessions = ctx.session_client();
    let checkout = Checkout::new(&orders, &sessions);

    let order = checkout
        .complete_online_payment(&OrderId::new(order_id), &mut cart, &slot)
        .map_err(friendly)?;
    ctx.output.success(&format!(
        "Payment recorded for order {} ({})",
        order.id,
        format_currency(Some(order.total_amount))
    ));
    Ok(())
}

fn prompt_customer() -> Result<CustomerDetails> {
    Ok(CustomerDetails {
        full_name: Input::new().with_prompt("Full name").interact_text()?,
        mobile: Input::new().with_prompt("Mobile number").interact_text()?,
        email: Input::new().with_prompt("Email").interact_text()?,
        address: Input::new().with_prompt("Full address").interact_text()?,
        city: Input::new().with_prompt("City").interact_text()?,
        state: Input::new().with_prompt("State").interact_text()?,
        pincode: Input::new().with_prompt("Pincode").interact_text()?,
        country: Input::new()
            .with_prompt("Country")
            .default("India".to_string())
            .interact_text()?,
    })
}

/// Turn a checkout error into something a shopper can act on.
fn friendly(e: CheckoutError) -> anyhow::Error {
    if matches!(e, CheckoutError::Payment(_)) {
        anyhow::anyhow!("{e}. The payment service may be down, please try again.")
    } else {
        anyhow::Error::new(e)
    }
}
