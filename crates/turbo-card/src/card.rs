//! Product card view state.
//!
//! `ProductCardState` is everything a card instance keeps between renders:
//! the derived options, the current selection and the image fallback. It is
//! created fresh for every mounted card and never persisted.

use serde::Serialize;

use crate::catalog::{Product, SelectedVariant};
use crate::config::{CardConfig, CardLayout};
use crate::error::CardError;
use crate::image::ImageSource;
use crate::notify::Notifier;
use crate::options::{distinct_colors, distinct_sizes, label_options, resolve_variant};
use crate::stock::StockPolicy;

const SELECTED_VARIANT_KEY: &str = "selectedVariant";

/// What the add-to-cart callback receives: the product with the selected
/// variant merged in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPayload {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "selectedVariant", skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<SelectedVariant>,
}

/// Card lifecycle phase.
///
/// `Submitted` only exists while add to cart runs; callers always observe
/// `Selecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Selecting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
enum Selection {
    Single {
        options: Vec<String>,
        selected: String,
    },
    Matrix {
        colors: Vec<String>,
        sizes: Vec<String>,
        color: Option<String>,
        size: Option<String>,
    },
}

/// State of one mounted product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardState {
    product: Product,
    config: CardConfig,
    selection: Selection,
    image: ImageSource,
    phase: CardPhase,
}

impl ProductCardState {
    /// Derive options and the default selection for `product`.
    pub fn new(product: Product, config: CardConfig) -> Self {
        let selection = match config.layout {
            CardLayout::Single => {
                let options = label_options(&product, &config.default_label);
                let selected = options
                    .first()
                    .cloned()
                    .unwrap_or_else(|| config.default_label.clone());
                Selection::Single { options, selected }
            }
            CardLayout::Matrix => {
                let colors = distinct_colors(&product);
                let sizes = distinct_sizes(&product);
                let color = colors.first().cloned();
                let size = sizes.first().cloned();
                Selection::Matrix {
                    colors,
                    sizes,
                    color,
                    size,
                }
            }
        };
        let image = ImageSource::new(product.image_url(), config.placeholder_image.clone());

        Self {
            product,
            config,
            selection,
            image,
            phase: CardPhase::Selecting,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn layout(&self) -> CardLayout {
        self.config.layout
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Dropdown labels (single layout only).
    pub fn label_options(&self) -> &[String] {
        match &self.selection {
            Selection::Single { options, .. } => options,
            Selection::Matrix { .. } => &[],
        }
    }

    /// Color toggles (matrix layout only).
    pub fn colors(&self) -> &[String] {
        match &self.selection {
            Selection::Matrix { colors, .. } => colors,
            Selection::Single { .. } => &[],
        }
    }

    /// Size dropdown entries (matrix layout only).
    pub fn sizes(&self) -> &[String] {
        match &self.selection {
            Selection::Matrix { sizes, .. } => sizes,
            Selection::Single { .. } => &[],
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        match &self.selection {
            Selection::Single { selected, .. } => Some(selected),
            Selection::Matrix { .. } => None,
        }
    }

    pub fn selected_color(&self) -> Option<&str> {
        match &self.selection {
            Selection::Matrix { color, .. } => color.as_deref(),
            Selection::Single { .. } => None,
        }
    }

    pub fn selected_size(&self) -> Option<&str> {
        match &self.selection {
            Selection::Matrix { size, .. } => size.as_deref(),
            Selection::Single { .. } => None,
        }
    }

    /// Pick a dropdown label.
    pub fn select_label(&mut self, label: &str) -> Result<(), CardError> {
        let disabled = self.selector_disabled();
        let title = &self.product.title;
        match &mut self.selection {
            Selection::Single { options, selected } => {
                if disabled {
                    tracing::warn!(%title, %label, "label selector is disabled");
                    return Err(CardError::SelectorDisabled(title.clone()));
                }
                if !options.iter().any(|o| o == label) {
                    return Err(CardError::UnknownOption {
                        kind: "label",
                        value: label.to_string(),
                    });
                }
                tracing::debug!(%title, %label, "label selected");
                *selected = label.to_string();
                Ok(())
            }
            Selection::Matrix { .. } => Err(CardError::LayoutMismatch {
                operation: "select_label",
                layout: CardLayout::Matrix.as_str(),
            }),
        }
    }

    /// Toggle a color.
    pub fn select_color(&mut self, value: &str) -> Result<(), CardError> {
        let title = &self.product.title;
        match &mut self.selection {
            Selection::Matrix { colors, color, .. } => {
                if !colors.iter().any(|c| c == value) {
                    return Err(CardError::UnknownOption {
                        kind: "color",
                        value: value.to_string(),
                    });
                }
                tracing::debug!(%title, color = %value, "color selected");
                *color = Some(value.to_string());
                Ok(())
            }
            Selection::Single { .. } => Err(CardError::LayoutMismatch {
                operation: "select_color",
                layout: CardLayout::Single.as_str(),
            }),
        }
    }

    /// Pick a size.
    pub fn select_size(&mut self, value: &str) -> Result<(), CardError> {
        let title = &self.product.title;
        match &mut self.selection {
            Selection::Matrix { sizes, size, .. } => {
                if !sizes.iter().any(|s| s == value) {
                    return Err(CardError::UnknownOption {
                        kind: "size",
                        value: value.to_string(),
                    });
                }
                tracing::debug!(%title, size = %value, "size selected");
                *size = Some(value.to_string());
                Ok(())
            }
            Selection::Single { .. } => Err(CardError::LayoutMismatch {
                operation: "select_size",
                layout: CardLayout::Single.as_str(),
            }),
        }
    }

    /// The variant the current selection stands for.
    ///
    /// In the matrix layout this is the variant matching both the color and
    /// the size, which may not exist.
    pub fn selected_variant(&self) -> Option<SelectedVariant> {
        match &self.selection {
            Selection::Single { selected, .. } => Some(SelectedVariant::Label(selected.clone())),
            Selection::Matrix {
                color: Some(color),
                size: Some(size),
                ..
            } => resolve_variant(&self.product, color, size).cloned().map(SelectedVariant::Matrix),
            Selection::Matrix { .. } => None,
        }
    }

    /// Whether the current selection can be bought.
    pub fn in_stock(&self) -> bool {
        let selected = self.selected_variant();
        self.config
            .stock_rule
            .in_stock(&self.product, selected.as_ref())
    }

    /// The single dropdown is locked while the card is out of stock.
    /// Matrix selectors stay usable.
    pub fn selector_disabled(&self) -> bool {
        matches!(self.selection, Selection::Single { .. }) && !self.in_stock()
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Handle an image load error. Returns the placeholder the first time only.
    pub fn on_image_error(&mut self) -> Option<String> {
        self.image.on_load_error().map(str::to_string)
    }

    pub fn price_display(&self) -> String {
        self.product.price_money(self.config.currency).display()
    }

    pub fn original_price_display(&self) -> Option<String> {
        self.product
            .original_price_money(self.config.currency)
            .map(|m| m.display())
    }

    /// Payload for the current selection.
    ///
    /// A `selectedVariant` field from the feed is replaced, or dropped when
    /// nothing is selected.
    pub fn cart_payload(&self) -> CartPayload {
        let mut product = self.product.clone();
        product.extra.remove(SELECTED_VARIANT_KEY);
        CartPayload {
            product,
            selected_variant: self.selected_variant(),
        }
    }

    /// Raise the success toast, then hand the payload to `on_add`.
    ///
    /// Fails without side effects when the selection is out of stock.
    pub fn add_to_cart<N, F>(&mut self, notifier: &mut N, on_add: F) -> Result<(), CardError>
    where
        N: Notifier + ?Sized,
        F: FnOnce(CartPayload),
    {
        if !self.in_stock() {
            tracing::warn!(title = %self.product.title, "add to cart while out of stock");
            return Err(CardError::OutOfStock(self.product.title.clone()));
        }

        self.phase = CardPhase::Submitted;
        let payload = self.cart_payload();
        tracing::info!(
            title = %self.product.title,
            variant = %payload
                .selected_variant
                .as_ref()
                .map(SelectedVariant::name)
                .unwrap_or_default(),
            "added to cart"
        );

        notifier.success(&self.config.added_message, self.config.toast_duration());
        on_add(payload);
        self.phase = CardPhase::Selecting;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MatrixVariant;
    use crate::notify::ToastQueue;
    use crate::stock::StockRule;

    fn tee() -> Product {
        Product::new("Tee", 20.0)
            .with_rating(4.5, 10)
            .with_variant(MatrixVariant::new("Red", "M", 3))
            .with_variant(MatrixVariant::new("Blue", "L", 0))
    }

    #[test]
    fn test_single_defaults_to_first_label() {
        let product = Product::new("Cap", 9.0)
            .with_rating(4.0, 3)
            .with_variant("Black")
            .with_variant("White");
        let state = ProductCardState::new(product, CardConfig::single_selector());
        assert_eq!(state.label_options(), ["Black", "White"]);
        assert_eq!(state.selected_label(), Some("Black"));
        assert!(state.colors().is_empty());
    }

    #[test]
    fn test_single_uses_configured_fallback_label() {
        let mut config = CardConfig::single_selector();
        config.default_label = "Standard".to_string();
        let state = ProductCardState::new(Product::new("Mug", 9.0), config);
        assert_eq!(state.label_options(), ["Standard"]);
    }

    #[test]
    fn test_label_selection_is_validated() {
        let product = Product::new("Cap", 9.0).with_rating(4.0, 3).with_variant("Black");
        let mut state = ProductCardState::new(product, CardConfig::single_selector());
        let err = state.select_label("Purple").unwrap_err();
        assert!(matches!(err, CardError::UnknownOption { kind: "label", .. }));
        assert_eq!(state.selected_label(), Some("Black"));
    }

    #[test]
    fn test_label_selection_blocked_when_disabled() {
        let product = Product::new("Cap", 9.0)
            .with_rating(4.0, 0)
            .with_variant("Black")
            .with_variant("White");
        let mut state = ProductCardState::new(product, CardConfig::single_selector());
        assert!(state.selector_disabled());
        assert!(matches!(
            state.select_label("White"),
            Err(CardError::SelectorDisabled(_))
        ));
    }

    #[test]
    fn test_layout_mismatch() {
        let mut state = ProductCardState::new(tee(), CardConfig::matrix());
        assert!(matches!(
            state.select_label("Red / M"),
            Err(CardError::LayoutMismatch { .. })
        ));

        let mut single = ProductCardState::new(tee(), CardConfig::single_selector());
        assert!(matches!(
            single.select_color("Red"),
            Err(CardError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn test_single_layout_labels_matrix_entries() {
        let state = ProductCardState::new(tee(), CardConfig::single_selector());
        assert_eq!(state.label_options(), ["Red / M", "Blue / L"]);
    }

    #[test]
    fn test_matrix_never_disables_selectors() {
        let product = Product::new("Tee", 20.0).with_variant(MatrixVariant::new("Red", "M", 0));
        let state = ProductCardState::new(product, CardConfig::matrix());
        assert!(!state.in_stock());
        assert!(!state.selector_disabled());
    }

    #[test]
    fn test_matrix_without_variants() {
        let state = ProductCardState::new(Product::new("Mug", 9.0), CardConfig::matrix());
        assert!(state.colors().is_empty());
        assert!(state.sizes().is_empty());
        assert_eq!(state.selected_color(), None);
        assert_eq!(state.selected_variant(), None);
        assert!(!state.in_stock());
    }

    #[test]
    fn test_stock_rule_is_independent_of_layout() {
        let config = CardConfig::single_selector().with_stock_rule(StockRule::Untracked);
        let state = ProductCardState::new(Product::new("Mug", 9.0), config);
        assert!(state.in_stock());
        assert!(!state.selector_disabled());
    }

    #[test]
    fn test_add_to_cart_out_of_stock_has_no_side_effects() {
        let mut state = ProductCardState::new(Product::new("Mug", 9.0), CardConfig::matrix());
        let mut toasts = ToastQueue::new();
        let mut calls = 0;

        let err = state.add_to_cart(&mut toasts, |_| calls += 1).unwrap_err();

        assert!(matches!(err, CardError::OutOfStock(_)));
        assert_eq!(calls, 0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_add_to_cart_returns_to_selecting() {
        let mut state = ProductCardState::new(tee(), CardConfig::matrix());
        let mut toasts = ToastQueue::new();
        let mut had_variant = None;

        state
            .add_to_cart(&mut toasts, |payload| {
                had_variant = Some(payload.selected_variant.is_some());
            })
            .unwrap();

        assert_eq!(had_variant, Some(true));
        assert_eq!(state.phase(), CardPhase::Selecting);
    }

    #[test]
    fn test_price_display() {
        let product = Product::new("Tee", 22.3).with_original_price(30.0);
        let state = ProductCardState::new(product, CardConfig::matrix());
        assert_eq!(state.price_display(), "$22.30");
        assert_eq!(state.original_price_display().as_deref(), Some("$30.00"));
    }

    #[test]
    fn test_image_error_goes_through_state() {
        let product = Product::new("Tee", 1.0).with_image("https://cdn.example/missing.jpg");
        let mut state = ProductCardState::new(product, CardConfig::matrix());
        assert!(state.on_image_error().is_some());
        assert!(state.on_image_error().is_none());
        assert!(state.image().has_fallen_back());
    }
}
