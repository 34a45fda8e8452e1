//! CLI command implementations.

pub mod config;
pub mod products;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list this brand (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Only list this category (firm-ground, soft-ground, artificial-grass, indoor).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price (default: filters.min_price).
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price (default: filters.max_price).
    #[arg(long)]
    pub max: Option<f64>,

    /// Only list products on sale.
    #[arg(long)]
    pub on_sale: bool,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Session script (TOML or JSON).
    pub script: String,

    /// Print every cart event recorded during the session.
    #[arg(long)]
    pub trace_events: bool,

    /// Write the recorded cart events to this file as JSON.
    #[arg(long, value_name = "PATH")]
    pub record: Option<String>,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
