//! Add-to-cart button renderer.

use crate::card::ProductCardState;

/// Render "Add to Cart" when the selection is purchasable, otherwise a
/// disabled "Out of Stock" button.
pub fn render_action(state: &ProductCardState) -> String {
    if state.in_stock() {
        r#"<button type="button" class="btn-add-to-cart" data-action="add-to-cart">Add to Cart</button>"#
            .to_string()
    } else {
        r#"<button type="button" class="btn-out-of-stock" disabled>Out of Stock</button>"#
            .to_string()
    }
}
