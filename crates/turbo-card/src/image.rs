//! Product image with a one-shot placeholder fallback.

/// Placeholder used when a product image cannot be loaded.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Image source for a card.
///
/// The first load error swaps in the placeholder. Any error after that is
/// ignored, so a broken placeholder cannot loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: String,
    fell_back: bool,
}

impl ImageSource {
    /// Start at `primary`, or at the placeholder when `primary` is blank.
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let primary = primary.into();
        let fell_back = primary.trim().is_empty();
        Self {
            primary,
            placeholder: placeholder.into(),
            fell_back,
        }
    }

    /// URL the image element should currently show.
    pub fn current(&self) -> &str {
        if self.fell_back {
            &self.placeholder
        } else {
            &self.primary
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn has_fallen_back(&self) -> bool {
        self.fell_back
    }

    /// Handle a load error. Returns the replacement URL the first time only.
    pub fn on_load_error(&mut self) -> Option<&str> {
        if self.fell_back {
            return None;
        }
        tracing::debug!(src = %self.primary, "product image failed, using placeholder");
        self.fell_back = true;
        Some(&self.placeholder)
    }
}
