//! CLI command implementations.

pub mod add;
pub mod config;
pub mod inspect;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use turbo_card::catalog::{parse_products, Product};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product JSON file (single object or array)
    pub file: PathBuf,

    /// Page title
    #[arg(long, default_value = "Product preview")]
    pub title: String,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Product JSON file (single object or array)
    pub file: PathBuf,

    /// Only inspect the product at this index
    #[arg(short, long)]
    pub index: Option<usize>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product JSON file (single object or array)
    pub file: PathBuf,

    /// Product index within the file
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Variant label to select (single layout)
    #[arg(long, conflicts_with_all = ["color", "size"])]
    pub label: Option<String>,

    /// Color to select (matrix layout)
    #[arg(long)]
    pub color: Option<String>,

    /// Size to select (matrix layout)
    #[arg(long)]
    pub size: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a config file with the default settings
    Init {
        /// Use the single-dropdown preset
        #[arg(long)]
        single: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Read products from a JSON file.
pub(crate) fn load_products(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read products: {}", path.display()))?;
    let products = parse_products(&content)
        .with_context(|| format!("Failed to parse products: {}", path.display()))?;
    if products.is_empty() {
        bail!("No products in {}", path.display());
    }
    Ok(products)
}

/// Pick one product by index.
pub(crate) fn pick_product(mut products: Vec<Product>, index: usize) -> Result<Product> {
    let count = products.len();
    if index >= count {
        bail!("Product index {} out of range ({} products)", index, count);
    }
    Ok(products.swap_remove(index))
}
