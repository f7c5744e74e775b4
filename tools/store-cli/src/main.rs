//! GameStore CLI - browse the catalog, fill a cart, and maintain products.
//!
//! Commands:
//! - `gamestore products` - List and search the catalog
//! - `gamestore categories` - Show the category menu
//! - `gamestore cart` - Manage a shopper's cart
//! - `gamestore admin` - Create, edit, and delete products
//! - `gamestore config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AdminArgs, CartArgs, CategoriesArgs, ConfigArgs, ProductsArgs};

/// GameStore CLI - a small video game store
#[derive(Parser)]
#[command(name = "gamestore")]
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
    /// List and search products
    Products(ProductsArgs),

    /// Show the category menu
    Categories(CategoriesArgs),

    /// Manage a shopping cart
    Cart(CartArgs),

    /// Maintain the catalog
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    ctx.logger.debug("cli started");

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.logger.error(&format!("{:#}", e));
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
