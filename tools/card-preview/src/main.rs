//! Card preview CLI.
//!
//! Commands:
//! - `card-preview render` - Render product JSON to an HTML page of cards
//! - `card-preview inspect` - Show derived options, selection and stock
//! - `card-preview add` - Select a variant and run add to cart
//! - `card-preview config` - Show or create card configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ConfigArgs, InspectArgs, RenderArgs};

/// Preview and exercise product cards
#[derive(Parser)]
#[command(name = "card-preview")]
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

    /// Override the selector layout (single, matrix)
    #[arg(long, global = true)]
    layout: Option<String>,

    /// Override the stock rule (review_count, variant_stock, untracked)
    #[arg(long, global = true)]
    stock_rule: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render products to an HTML preview page
    Render(RenderArgs),

    /// Show what a card derives from a product
    Inspect(InspectArgs),

    /// Select a variant and add it to the cart
    Add(AddArgs),

    /// Manage card configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let overrides = context::Overrides {
        layout: cli.layout,
        stock_rule: cli.stock_rule,
    };
    let ctx = match context::Context::load(cli.config.as_deref(), overrides, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Add(args) => commands::add::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
