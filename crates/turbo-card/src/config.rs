//! Card configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::image::PLACEHOLDER_IMAGE;
use crate::money::Currency;
use crate::options::DEFAULT_LABEL;
use crate::stock::StockRule;

/// Which selectors a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    /// One dropdown over variant labels.
    Single,
    /// Size dropdown plus color toggles.
    #[default]
    Matrix,
}

impl CardLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Single => "single",
            CardLayout::Matrix => "matrix",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(CardLayout::Single),
            "matrix" => Some(CardLayout::Matrix),
            _ => None,
        }
    }
}

/// Product card configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Selector layout.
    #[serde(default)]
    pub layout: CardLayout,

    /// Rule deciding whether the selection is purchasable.
    #[serde(default)]
    pub stock_rule: StockRule,

    /// Image shown after the product image fails to load.
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,

    /// Currency used for price display.
    #[serde(default)]
    pub currency: Currency,

    /// Only option offered when a product has no variants (single layout).
    #[serde(default = "default_label")]
    pub default_label: String,

    /// Toast message after add to cart.
    #[serde(default = "default_added_message")]
    pub added_message: String,

    /// How long the toast stays visible.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_placeholder() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_added_message() -> String {
    "Added to cart".to_string()
}

fn default_toast_duration_ms() -> u64 {
    2000
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            layout: CardLayout::default(),
            stock_rule: StockRule::default(),
            placeholder_image: default_placeholder(),
            currency: Currency::default(),
            default_label: default_label(),
            added_message: default_added_message(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl CardConfig {
    /// Single dropdown with the legacy review-count stock rule.
    pub fn single_selector() -> Self {
        Self {
            layout: CardLayout::Single,
            stock_rule: StockRule::ReviewCount,
            ..Self::default()
        }
    }

    /// Color/size matrix with per-variant stock.
    pub fn matrix() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_stock_rule(mut self, rule: StockRule) -> Self {
        self.stock_rule = rule;
        self
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Parse TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, CardError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))
        } else {
            toml::from_str(&content)
                .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))
        }
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String, CardError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.layout, CardLayout::Matrix);
        assert_eq!(config.stock_rule, StockRule::VariantStock);
        assert_eq!(config.default_label, "Default");
        assert_eq!(config.added_message, "Added to cart");
        assert_eq!(config.toast_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_single_selector_preset() {
        let config = CardConfig::single_selector();
        assert_eq!(config.layout, CardLayout::Single);
        assert_eq!(config.stock_rule, StockRule::ReviewCount);
    }

    #[test]
    fn test_partial_toml() {
        let config = CardConfig::from_toml_str(
            r#"
layout = "single"
stock_rule = "untracked"
currency = "EUR"
"#,
        )
        .unwrap();
        assert_eq!(config.layout, CardLayout::Single);
        assert_eq!(config.stock_rule, StockRule::Untracked);
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CardConfig::from_toml_str(r#"layout = "carousel""#).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CardConfig::single_selector();
        let text = config.to_toml_string().unwrap();
        assert_eq!(CardConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("turbo-card-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"layout": "single", "toast_duration_ms": 500}"#).unwrap();

        let config = CardConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.layout, CardLayout::Single);
        assert_eq!(config.toast_duration_ms, 500);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CardConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }
}
