//! ShopHub CLI - drive a storefront session from the terminal.
//!
//! Commands:
//! - `shophub products` - List the catalog
//! - `shophub categories` - List the categories
//! - `shophub shell` - Shop interactively
//! - `shophub run` - Apply a script of actions
//! - `shophub config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod parse;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, ProductsArgs, RunArgs};

/// ShopHub CLI - Browse the catalog and walk through the storefront flow
#[derive(Parser)]
#[command(name = "shophub")]
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
    /// List products, optionally filtered by category
    Products(ProductsArgs),

    /// List product categories
    Categories,

    /// Start an interactive shopping session
    Shell,

    /// Apply the actions in a script file to a fresh session
    Run(RunArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "shophub=debug,shophub_commerce=debug"
    } else {
        "shophub=info,shophub_commerce=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
