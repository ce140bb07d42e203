//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use turbo_card::stock::StockRule;
use turbo_card::{CardConfig, CardLayout};

use crate::output::Output;

/// Config file names searched from the working directory upward.
const CONFIG_NAMES: [&str; 3] = ["card.toml", ".card.toml", "card.json"];

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub layout: Option<String>,
    pub stock_rule: Option<String>,
}

/// Execution context for CLI commands.
pub struct Context {
    /// Card configuration.
    pub config: CardConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, overrides: Overrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let config = CardConfig::load(path)
                    .with_context(|| format!("Failed to load config file: {}", path))?;
                (config, Some(PathBuf::from(path)))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CardConfig::default(), None),
            },
        };

        apply_overrides(&mut config, &overrides)?;

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    fn find_config(start: &Path) -> Option<(CardConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    match CardConfig::load(&candidate) {
                        Ok(config) => return Some((config, candidate)),
                        Err(e) => tracing::warn!(path = %candidate.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path for a fresh config file in the working directory.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}

fn apply_overrides(config: &mut CardConfig, overrides: &Overrides) -> Result<()> {
    if let Some(layout) = &overrides.layout {
        config.layout = CardLayout::from_str(layout)
            .ok_or_else(|| anyhow!("Unknown layout '{}' (expected single or matrix)", layout))?;
    }
    if let Some(rule) = &overrides.stock_rule {
        config.stock_rule = StockRule::from_str(rule).ok_or_else(|| {
            anyhow!(
                "Unknown stock rule '{}' (expected review_count, variant_stock or untracked)",
                rule
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let mut config = CardConfig::default();
        let overrides = Overrides {
            layout: Some("single".into()),
            stock_rule: Some("review-count".into()),
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert_eq!(config.layout, CardLayout::Single);
        assert_eq!(config.stock_rule, StockRule::ReviewCount);
    }

    #[test]
    fn test_bad_override() {
        let mut config = CardConfig::default();
        let overrides = Overrides {
            layout: Some("carousel".into()),
            stock_rule: None,
        };
        assert!(apply_overrides(&mut config, &overrides).is_err());
        assert_eq!(config.layout, CardLayout::Matrix);
    }
}
