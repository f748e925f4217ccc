//! CLI configuration module

use clap::{Args, Parser, Subcommand};
use storefront::products::ProductId;

use crate::config::{observability::LoggingConfig, store::StoreConfig};

pub(crate) mod observability;
pub(crate) mod store;

/// Storefront cart CLI configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront cart client", long_about = None)]
pub struct CliConfig {
    /// Storefront connection settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// What to do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a product to the cart.
    Add(AddArgs),
}

/// Arguments for `add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product identifier
    #[arg(long)]
    pub product_id: ProductId,

    /// Units to add
    #[arg(long = "qty", default_value_t = 1)]
    pub quantity: u32,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
