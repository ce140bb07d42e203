//! Rating line renderer.

use crate::card::ProductCardState;

/// Render the star, average score and review count.
pub fn render_rating(state: &ProductCardState) -> String {
    let product = state.product();
    format!(
        r#"<div class="product-rating">
            <span class="rating-star" aria-hidden="true">&#9733;</span>
            <small class="rating-rate">{rate}</small>
            <small class="rating-count">({count} reviews)</small>
        </div>"#,
        rate = product.rating_rate(),
        count = product.review_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::config::CardConfig;

    #[test]
    fn test_rated() {
        let state = ProductCardState::new(
            Product::new("Tee", 1.0).with_rating(3.9, 120),
            CardConfig::default(),
        );
        let html = render_rating(&state);
        assert!(html.contains(r#"<small class="rating-rate">3.9</small>"#));
        assert!(html.contains("(120 reviews)"));
    }

    #[test]
    fn test_unrated_renders_zero() {
        let state = ProductCardState::new(Product::new("Tee", 1.0), CardConfig::default());
        let html = render_rating(&state);
        assert!(html.contains(r#"<small class="rating-rate">0</small>"#));
        assert!(html.contains("(0 reviews)"));
    }
}
