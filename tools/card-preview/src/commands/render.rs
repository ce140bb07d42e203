//! Render command implementation.

use anyhow::{Context as _, Result};
use turbo_card::render::render_card_page;
use turbo_card::ProductCardState;

use super::{load_products, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;
    ctx.output
        .debug(&format!("Rendering {} products ({} layout)", products.len(), ctx.config.layout.as_str()));

    let cards: Vec<ProductCardState> = products
        .into_iter()
        .map(|product| ProductCardState::new(product, ctx.config.clone()))
        .collect();
    let html = render_card_page(&args.title, &cards);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "cards": cards.len(),
                    "bytes": html.len(),
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} cards to {}", cards.len(), path.display()));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
