//! Stock rules.
//!
//! A card asks a [`StockPolicy`] whether the current selection can be
//! bought. Which rule applies is configuration, not layout.

use crate::catalog::{Product, SelectedVariant};
use serde::{Deserialize, Serialize};

/// Decides whether a selection is purchasable.
pub trait StockPolicy {
    fn in_stock(&self, product: &Product, selected: Option<&SelectedVariant>) -> bool;
}

/// Legacy rule: purchasable iff the product has at least one review.
///
/// Review count is not inventory. This only exists so older single-selector
/// cards keep their behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewCountPolicy;

impl StockPolicy for ReviewCountPolicy {
    fn in_stock(&self, product: &Product, _selected: Option<&SelectedVariant>) -> bool {
        product.review_count() > 0
    }
}

/// Purchasable iff the selected variant exists and has units left.
///
/// Plain labels carry no stock count and are never purchasable under this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantStockPolicy;

impl StockPolicy for VariantStockPolicy {
    fn in_stock(&self, _product: &Product, selected: Option<&SelectedVariant>) -> bool {
        selected
            .and_then(SelectedVariant::stock)
            .map(|stock| stock > 0)
            .unwrap_or(false)
    }
}

/// Inventory is not tracked; everything is purchasable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntrackedPolicy;

impl StockPolicy for UntrackedPolicy {
    fn in_stock(&self, _product: &Product, _selected: Option<&SelectedVariant>) -> bool {
        true
    }
}

/// Serializable choice of stock rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockRule {
    ReviewCount,
    #[default]
    VariantStock,
    Untracked,
}

impl StockRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockRule::ReviewCount => "review_count",
            StockRule::VariantStock => "variant_stock",
            StockRule::Untracked => "untracked",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "review_count" => Some(StockRule::ReviewCount),
            "variant_stock" => Some(StockRule::VariantStock),
            "untracked" => Some(StockRule::Untracked),
            _ => None,
        }
    }
}

impl StockPolicy for StockRule {
    fn in_stock(&self, product: &Product, selected: Option<&SelectedVariant>) -> bool {
        match self {
            StockRule::ReviewCount => ReviewCountPolicy.in_stock(product, selected),
            StockRule::VariantStock => VariantStockPolicy.in_stock(product, selected),
            StockRule::Untracked => UntrackedPolicy.in_stock(product, selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MatrixVariant;

    #[test]
    fn test_review_count_rule() {
        let reviewed = Product::new("A", 1.0).with_rating(4.0, 12);
        let unreviewed = Product::new("B", 1.0).with_rating(0.0, 0);
        let unrated = Product::new("C", 1.0);

        assert!(StockRule::ReviewCount.in_stock(&reviewed, None));
        assert!(!StockRule::ReviewCount.in_stock(&unreviewed, None));
        assert!(!StockRule::ReviewCount.in_stock(&unrated, None));
    }

    #[test]
    fn test_variant_stock_rule() {
        let product = Product::new("Tee", 20.0);
        let stocked = SelectedVariant::Matrix(MatrixVariant::new("Red", "M", 3));
        let empty = SelectedVariant::Matrix(MatrixVariant::new("Blue", "L", 0));
        let label = SelectedVariant::Label("Default".into());

        assert!(StockRule::VariantStock.in_stock(&product, Some(&stocked)));
        assert!(!StockRule::VariantStock.in_stock(&product, Some(&empty)));
        assert!(!StockRule::VariantStock.in_stock(&product, Some(&label)));
        assert!(!StockRule::VariantStock.in_stock(&product, None));
    }

    #[test]
    fn test_untracked_rule() {
        assert!(StockRule::Untracked.in_stock(&Product::new("A", 1.0), None));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(StockRule::from_str("review-count"), Some(StockRule::ReviewCount));
        assert_eq!(StockRule::from_str("VARIANT_STOCK"), Some(StockRule::VariantStock));
        assert_eq!(StockRule::from_str("magic"), None);
        assert_eq!(StockRule::Untracked.as_str(), "untracked");
    }
}
