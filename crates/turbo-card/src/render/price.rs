//! Price block renderer.

use super::escape_html;
use crate::card::ProductCardState;

/// Render the current price, plus the struck-through original price if set.
pub fn render_price(state: &ProductCardState) -> String {
    let original = match state.original_price_display() {
        Some(original) => format!(
            r#"
            <s class="price-original">{}</s>"#,
            escape_html(&original)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="product-price">
            <span class="price-current">{current}</span>{original}
        </div>"#,
        current = escape_html(&state.price_display()),
        original = original
    )
}
