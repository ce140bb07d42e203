//! Variant shapes.

use serde::{Deserialize, Serialize};

/// A color/size combination with its own stock count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MatrixVariant {
    /// Color value (e.g., "Red").
    pub color: String,
    /// Size value (e.g., "M").
    pub size: String,
    /// Units available for purchase.
    #[serde(default)]
    pub stock: i64,
}

impl MatrixVariant {
    pub fn new(color: impl Into<String>, size: impl Into<String>, stock: i64) -> Self {
        Self {
            color: color.into(),
            size: size.into(),
            stock,
        }
    }

    /// Check if this variant has units left.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Display name (e.g., "Red / M").
    pub fn name(&self) -> String {
        format!("{} / {}", self.color, self.size)
    }

    /// Check if this variant matches a color and size exactly.
    pub fn matches(&self, color: &str, size: &str) -> bool {
        self.color == color && self.size == size
    }
}

/// One entry of a product's `variants` list.
///
/// Feeds use either plain labels (`["Red", "Blue"]`) or structured
/// records (`[{"color": "Red", "size": "M", "stock": 3}]`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum VariantEntry {
    Matrix(MatrixVariant),
    Label(String),
}

impl VariantEntry {
    /// Label shown in a single dropdown.
    pub fn label(&self) -> String {
        match self {
            VariantEntry::Matrix(v) => v.name(),
            VariantEntry::Label(label) => label.clone(),
        }
    }

    /// The structured variant, if this entry has one.
    pub fn as_matrix(&self) -> Option<&MatrixVariant> {
        match self {
            VariantEntry::Matrix(v) => Some(v),
            VariantEntry::Label(_) => None,
        }
    }
}

impl From<MatrixVariant> for VariantEntry {
    fn from(v: MatrixVariant) -> Self {
        VariantEntry::Matrix(v)
    }
}

impl From<&str> for VariantEntry {
    fn from(label: &str) -> Self {
        VariantEntry::Label(label.to_string())
    }
}

/// The variant a card hands to the add-to-cart callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SelectedVariant {
    Matrix(MatrixVariant),
    Label(String),
}

impl SelectedVariant {
    /// Stock count, when the variant tracks one.
    pub fn stock(&self) -> Option<i64> {
        match self {
            SelectedVariant::Matrix(v) => Some(v.stock),
            SelectedVariant::Label(_) => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> String {
        match self {
            SelectedVariant::Matrix(v) => v.name(),
            SelectedVariant::Label(label) => label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accepts_both_shapes() {
        let entries: Vec<VariantEntry> =
            serde_json::from_str(r#"["Black", {"color": "Red", "size": "M", "stock": 3}]"#)
                .unwrap();

        assert_eq!(entries[0], VariantEntry::Label("Black".to_string()));
        assert_eq!(
            entries[1],
            VariantEntry::Matrix(MatrixVariant::new("Red", "M", 3))
        );
    }

    #[test]
    fn test_missing_stock_defaults_to_zero() {
        let entry: VariantEntry = serde_json::from_str(r#"{"color": "Red", "size": "S"}"#).unwrap();
        let variant = entry.as_matrix().unwrap();
        assert_eq!(variant.stock, 0);
        assert!(!variant.is_in_stock());
    }

    #[test]
    fn test_labels() {
        assert_eq!(VariantEntry::from("Large").label(), "Large");
        assert_eq!(
            VariantEntry::from(MatrixVariant::new("Blue", "L", 0)).label(),
            "Blue / L"
        );
    }

    #[test]
    fn test_selected_variant_serializes_inline() {
        let label = serde_json::to_value(SelectedVariant::Label("Default".into())).unwrap();
        assert_eq!(label, serde_json::json!("Default"));

        let matrix =
            serde_json::to_value(SelectedVariant::Matrix(MatrixVariant::new("Red", "M", 3))).unwrap();
        assert_eq!(
            matrix,
            serde_json::json!({"color": "Red", "size": "M", "stock": 3})
        );
    }
}
