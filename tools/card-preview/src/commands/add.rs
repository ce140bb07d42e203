//! Add command implementation.

use anyhow::{Context as _, Result};
use turbo_card::notify::ToastQueue;
use turbo_card::{CardLayout, CartPayload, ProductCardState};

use super::{load_products, pick_product, AddArgs};
use crate::context::Context;

/// Run the add command.
pub fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let product = pick_product(load_products(&args.file)?, args.index)?;
    let mut card = ProductCardState::new(product, ctx.config.clone());

    apply_selection(&mut card, &args, ctx)?;

    let mut toasts = ToastQueue::new();
    let mut cart: Vec<CartPayload> = Vec::new();
    card.add_to_cart(&mut toasts, |payload| cart.push(payload))
        .with_context(|| format!("Cannot add '{}' to cart", card.product().title))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "payload": cart.first(),
            "toasts": toasts.active(),
        }));
        return Ok(());
    }

    for payload in &cart {
        let json = serde_json::to_string_pretty(payload).context("Failed to encode payload")?;
        println!("{}", json);
    }
    for toast in toasts.active() {
        ctx.output.success(&toast.message);
    }

    Ok(())
}

fn apply_selection(card: &mut ProductCardState, args: &AddArgs, ctx: &Context) -> Result<()> {
    match card.layout() {
        CardLayout::Single => {
            if args.color.is_some() || args.size.is_some() {
                ctx.output.warn("--color/--size are ignored by the single layout");
            }
            if let Some(label) = &args.label {
                card.select_label(label)
                    .with_context(|| format!("Cannot select '{}'", label))?;
            }
        }
        CardLayout::Matrix => {
            if args.label.is_some() {
                ctx.output.warn("--label is ignored by the matrix layout");
            }
            if let Some(color) = &args.color {
                card.select_color(color)
                    .with_context(|| format!("Cannot select color '{}'", color))?;
            }
            if let Some(size) = &args.size {
                card.select_size(size)
                    .with_context(|| format!("Cannot select size '{}'", size))?;
            }
        }
    }
    Ok(())
}
