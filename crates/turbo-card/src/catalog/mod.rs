//! Product catalog module.
//!
//! Contains the product record a card renders and the variant shapes it
//! derives options from.

mod product;
mod variant;

pub use product::{parse_products, Product, Rating};
pub use variant::{MatrixVariant, SelectedVariant, VariantEntry};
