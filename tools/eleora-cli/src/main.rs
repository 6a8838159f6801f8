//! Eleora CLI - storefront and back-office for the Eleora shop.
//!
//! Commands:
//! - `eleora products` - Browse the catalog, manage products
//! - `eleora cart` - Show and mutate the session cart
//! - `eleora checkout` - Place an order (COD or hosted payment page)
//! - `eleora orders` - Back-office order management
//! - `eleora contact` - Send a message / read the inbox

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CheckoutArgs, ContactArgs, OrdersArgs, ProductsArgs};

/// Eleora CLI - shop the catalog and run the back-office
#[derive(Parser)]
#[command(name = "eleora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the product catalog
    Products(ProductsArgs),

    /// Show and mutate the session cart
    Cart(CartArgs),

    /// Place an order from the cart
    Checkout(CheckoutArgs),

    /// Manage placed orders
    Orders(OrdersArgs),

    /// Contact the store / read the inbox
    Contact(ContactArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
