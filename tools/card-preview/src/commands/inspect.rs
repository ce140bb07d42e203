//! Inspect command implementation.

use anyhow::Result;
use serde::Serialize;
use turbo_card::catalog::SelectedVariant;
use turbo_card::{CardLayout, ProductCardState};

use super::{load_products, pick_product, InspectArgs};
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct CardReport {
    title: String,
    layout: &'static str,
    stock_rule: &'static str,
    options: Vec<String>,
    colors: Vec<String>,
    sizes: Vec<String>,
    selected: Option<SelectedVariant>,
    in_stock: bool,
    selector_disabled: bool,
    price: String,
    original_price: Option<String>,
    image: String,
}

impl CardReport {
    fn from_state(state: &ProductCardState) -> Self {
        Self {
            title: state.product().title.clone(),
            layout: state.layout().as_str(),
            stock_rule: state.config().stock_rule.as_str(),
            options: state.label_options().to_vec(),
            colors: state.colors().to_vec(),
            sizes: state.sizes().to_vec(),
            selected: state.selected_variant(),
            in_stock: state.in_stock(),
            selector_disabled: state.selector_disabled(),
            price: state.price_display(),
            original_price: state.original_price_display(),
            image: state.image().current().to_string(),
        }
    }
}

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;
    let products = match args.index {
        Some(index) => vec![pick_product(products, index)?],
        None => products,
    };

    let reports: Vec<CardReport> = products
        .into_iter()
        .map(|product| CardReport::from_state(&ProductCardState::new(product, ctx.config.clone())))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    for report in &reports {
        print_report(report, ctx);
    }

    Ok(())
}

fn print_report(report: &CardReport, ctx: &Context) {
    ctx.output.header(&report.title);
    ctx.output.kv("Layout", report.layout);
    ctx.output.kv("Stock rule", report.stock_rule);
    ctx.output.kv("Price", &report.price);
    if let Some(original) = &report.original_price {
        ctx.output.kv("Was", original);
    }
    ctx.output.kv("Image", &report.image);

    if report.layout == CardLayout::Single.as_str() {
        ctx.output.kv("Options", "");
        for option in &report.options {
            ctx.output.list_item(option);
        }
    } else {
        ctx.output.kv("Colors", &report.colors.join(", "));
        ctx.output.kv("Sizes", &report.sizes.join(", "));
    }

    let selected = report
        .selected
        .as_ref()
        .map(SelectedVariant::name)
        .unwrap_or_else(|| "none".to_string());
    ctx.output.kv("Selected", &selected);
    ctx.output.kv("Stock", &stock_badge(report.in_stock));
    if report.selector_disabled {
        ctx.output.warn("Selector is disabled while out of stock");
    }
}
