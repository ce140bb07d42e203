//! Config command implementation.

use anyhow::{bail, Context as _, Result};
use turbo_card::CardConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { single, force } => init(ctx, single, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Card configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("Source", &path.display().to_string()),
        None => ctx.output.kv("Source", "defaults"),
    }
    let config = &ctx.config;
    ctx.output.kv("Layout", config.layout.as_str());
    ctx.output.kv("Stock rule", config.stock_rule.as_str());
    ctx.output.kv("Currency", config.currency.code());
    ctx.output.kv("Default label", &config.default_label);
    ctx.output.kv("Placeholder", &config.placeholder_image);
    ctx.output.kv("Added message", &config.added_message);
    ctx.output.kv("Toast duration", &format!("{}ms", config.toast_duration_ms));
    Ok(())
}

fn init(ctx: &Context, single: bool, force: bool) -> Result<()> {
    let path = ctx.default_config_path();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = if single {
        CardConfig::single_selector()
    } else {
        CardConfig::default()
    };
    let content = config.to_toml_string().context("Failed to encode config")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output.success(&format!("Created {}", path.display()));
    ctx.output.info("Set layout and stock_rule there to change how cards behave");
    Ok(())
}
