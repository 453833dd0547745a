//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod products;
pub mod run;
pub mod shell;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list products in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Script with one action per line.
    pub script: String,

    /// Stop at the first refused action.
    #[arg(long)]
    pub strict: bool,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and its catalog.
    Validate,
}
