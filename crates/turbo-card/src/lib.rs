//! Product card for TurboCommerce storefronts.
//!
//! This crate holds the framework-independent half of the card:
//!
//! - **Catalog**: product records and variant shapes
//! - **Options**: selectable labels, colors and sizes derived from variants
//! - **Stock**: configurable rules deciding whether a selection is purchasable
//! - **Card**: per-instance view state and the add-to-cart flow
//! - **Render**: static HTML for SSR and previews
//!
//! # Example
//!
//! ```rust
//! use turbo_card::prelude::*;
//!
//! let product = Product::new("Classic Tee", 19.99)
//!     .with_variant(MatrixVariant::new("Red", "M", 3))
//!     .with_variant(MatrixVariant::new("Blue", "L", 0));
//!
//! let mut card = ProductCardState::new(product, CardConfig::matrix());
//! assert!(card.in_stock());
//!
//! let mut toasts = ToastQueue::new();
//! let mut cart = Vec::new();
//! card.add_to_cart(&mut toasts, |payload| cart.push(payload)).unwrap();
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(toasts.len(), 1);
//! ```

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod money;
pub mod notify;
pub mod options;
pub mod render;
pub mod stock;

pub use card::{CardPhase, CartPayload, ProductCardState};
pub use config::{CardConfig, CardLayout};
pub use error::CardError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardPhase, CartPayload, ProductCardState};
    pub use crate::catalog::{parse_products, MatrixVariant, Product, Rating, SelectedVariant, VariantEntry};
    pub use crate::config::{CardConfig, CardLayout};
    pub use crate::error::CardError;
    pub use crate::image::{ImageSource, PLACEHOLDER_IMAGE};
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{Notifier, Toast, ToastKind, ToastQueue};
    pub use crate::stock::{StockPolicy, StockRule};
}
