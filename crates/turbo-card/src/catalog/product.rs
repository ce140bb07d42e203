//! Product record.

use crate::catalog::{MatrixVariant, VariantEntry};
use crate::error::CardError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Review summary for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Number of reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Rating {
    pub fn new(rate: f64, count: i64) -> Self {
        Self {
            rate: Some(rate),
            count: Some(count),
        }
    }
}

/// A product as delivered by the storefront feed.
///
/// Fields the card does not read (`id`, `description`, `category`, ...)
/// are kept in `extra` and travel with the add-to-cart payload unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Image URL. May be missing, empty or broken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: f64,
    /// Price before discount, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Review summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Variant labels or color/size records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantEntry>,
    /// Everything else from the feed.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with a title and price.
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            ..Default::default()
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_original_price(mut self, price: f64) -> Self {
        self.original_price = Some(price);
        self
    }

    pub fn with_rating(mut self, rate: f64, count: i64) -> Self {
        self.rating = Some(Rating::new(rate, count));
        self
    }

    pub fn with_variant(mut self, variant: impl Into<VariantEntry>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Attach an extra feed field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Parse a single product from JSON.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Image URL, empty when the feed has none.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }

    /// Average score, 0 when unrated.
    pub fn rating_rate(&self) -> f64 {
        self.rating.and_then(|r| r.rate).unwrap_or(0.0)
    }

    /// Review count, 0 when unrated.
    pub fn review_count(&self) -> i64 {
        self.rating.and_then(|r| r.count).unwrap_or(0)
    }

    /// Current price as money.
    pub fn price_money(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }

    /// Original price as money, if one worth showing is set.
    pub fn original_price_money(&self, currency: Currency) -> Option<Money> {
        self.original_price
            .filter(|p| *p > 0.0)
            .map(|p| Money::from_decimal(p, currency))
    }

    /// Iterate the structured variants, skipping plain labels.
    pub fn matrix_variants(&self) -> impl Iterator<Item = &MatrixVariant> {
        self.variants.iter().filter_map(VariantEntry::as_matrix)
    }

    /// Check if the feed supplied any variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Product>),
    One(Box<Product>),
}

/// Parse either a single product object or an array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CardError> {
    match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(products) => Ok(products),
        OneOrMany::One(product) => Ok(vec![*product]),
    }
}
