//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod categories;
pub mod config;
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
    /// List one page of the catalog.
    List {
        /// Only show this category (exact match).
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-based).
        #[arg(short, long, default_value = "1")]
        page: i64,
    },
    /// Find products whose name contains a term.
    Search {
        /// Case-sensitive search term; omit to list everything.
        term: Option<String>,
    },
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Category to mark as selected.
    #[arg(short, long)]
    pub selected: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Shopper session the cart belongs to.
    #[arg(short, long, default_value = "default")]
    pub session: String,

    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and total.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product id.
        product_id: i64,

        /// Number of units.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Remove a product's line from the cart.
    Remove {
        /// Product id.
        product_id: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Product fields settable from the command line.
#[derive(Args, Default)]
pub struct ProductFields {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,

    /// Description.
    #[arg(long)]
    pub description: Option<String>,

    /// Category; an empty string makes the product uncategorized.
    #[arg(long)]
    pub category: Option<String>,

    /// Price as a decimal amount (e.g. 499.99).
    #[arg(long)]
    pub price: Option<String>,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List every product.
    List,
    /// Show one product.
    Show {
        /// Product id.
        id: i64,
    },
    /// Add a new product.
    Create {
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Change an existing product.
    Edit {
        /// Product id.
        id: i64,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product id.
        id: i64,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Set a configuration value.
    Set {
        /// Config key (e.g., store.page_size).
        key: String,

        /// Value to set.
        value: String,
    },
    /// Write a gamestore.toml in the current directory.
    Init {
        /// Store name.
        #[arg(long, default_value = "GameStore")]
        name: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
