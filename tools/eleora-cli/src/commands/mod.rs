//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod orders;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products in the catalog.
    List {
        /// Include deactivated products.
        #[arg(short, long)]
        all: bool,
    },
    /// Show one product with per-size prices.
    Show {
        /// Product ID.
        id: String,
    },
    /// Add a product to the catalog.
    Add,
    /// Hide a product from the storefront.
    Deactivate {
        /// Product ID.
        id: String,
    },
    /// Make a product visible again.
    Activate {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with line totals.
    Show,
    /// Add a product/size to the cart.
    Add {
        /// Product ID.
        product: String,
        /// Package size (50g, 100g, 200g, 500g).
        size: String,
        /// Quantity (clamped to at least 1).
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a product/size from the cart.
    Remove {
        /// Product ID.
        product: String,
        /// Package size.
        size: String,
    },
    /// Set the quantity of a line (0 removes it).
    SetQty {
        /// Product ID.
        product: String,
        /// Package size.
        size: String,
        /// New quantity.
        quantity: u32,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Pay cash on delivery.
    #[arg(long, conflicts_with = "online")]
    pub cod: bool,

    /// Pay through the hosted payment page.
    #[arg(long)]
    pub online: bool,

    /// Record a confirmed online payment for an order and empty the cart.
    #[arg(long, value_name = "ORDER_ID", conflicts_with_all = ["cod", "online"])]
    pub confirm: Option<String>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List all orders, newest first.
    List,
    /// Show one order with its line items.
    Show {
        /// Order ID.
        id: String,
    },
    /// Update an order's status.
    SetStatus {
        /// Order ID.
        id: String,
        /// New status (pending, processing, shipped, delivered, cancelled).
        status: String,
    },
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[command(subcommand)]
    pub command: ContactCommand,
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Send a message to the store.
    Send,
    /// List received messages (back-office).
    List,
}
