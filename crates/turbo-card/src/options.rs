//! Option derivation from a product's variant list.
//!
//! All lists keep first-occurrence order from the feed and collapse
//! duplicates.

use crate::catalog::{MatrixVariant, Product};

/// Label used when a product has no variants at all.
pub const DEFAULT_LABEL: &str = "Default";

/// Labels for a single dropdown, or `[fallback]` if the product has none.
pub fn label_options(product: &Product, fallback: &str) -> Vec<String> {
    let labels = distinct(product.variants.iter().map(|v| v.label()));
    if labels.is_empty() {
        vec![fallback.to_string()]
    } else {
        labels
    }
}

/// Distinct colors across the structured variants.
pub fn distinct_colors(product: &Product) -> Vec<String> {
    distinct(product.matrix_variants().map(|v| v.color.clone()))
}

/// Distinct sizes across the structured variants.
pub fn distinct_sizes(product: &Product) -> Vec<String> {
    distinct(product.matrix_variants().map(|v| v.size.clone()))
}

/// Find the variant matching both the color and the size.
pub fn resolve_variant<'a>(
    product: &'a Product,
    color: &str,
    size: &str,
) -> Option<&'a MatrixVariant> {
    product.matrix_variants().find(|v| v.matches(color, size))
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
