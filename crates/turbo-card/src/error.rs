//! Card error types.

use thiserror::Error;

/// Errors that can occur while driving a product card.
#[derive(Error, Debug)]
pub enum CardError {
    /// Add to cart was attempted while the selection is not purchasable.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// The selector is disabled and cannot change.
    #[error("Selector disabled for {0}")]
    SelectorDisabled(String),

    /// Value is not one of the options the card offers.
    #[error("Unknown {kind} option: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// Operation does not apply to the card's layout.
    #[error("Operation {operation} not supported by {layout} layout")]
    LayoutMismatch {
        operation: &'static str,
        layout: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CardError {
    fn from(e: toml::de::Error) -> Self {
        CardError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CardError {
    fn from(e: toml::ser::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}
