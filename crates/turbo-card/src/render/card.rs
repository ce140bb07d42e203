//! Full card renderer.

use super::{escape_html, escape_js, render_action, render_price, render_rating, render_selector};
use crate::card::ProductCardState;

/// Render the product image.
///
/// The inline handler clears itself before swapping in the placeholder, so
/// a broken placeholder is not retried.
pub fn render_image(state: &ProductCardState) -> String {
    let image = state.image();
    let title = &state.product().title;

    if image.has_fallen_back() {
        return format!(
            r#"<img src="{src}" alt="{alt}" class="product-image">"#,
            src = escape_html(image.current()),
            alt = escape_html(title)
        );
    }

    format!(
        r#"<img src="{src}" alt="{alt}" class="product-image" onerror="this.onerror=null;this.src='{fallback}';">"#,
        src = escape_html(image.current()),
        alt = escape_html(title),
        fallback = escape_html(&escape_js(image.placeholder()))
    )
}

/// Render the whole card.
pub fn render_card(state: &ProductCardState) -> String {
    let title = escape_html(&state.product().title);

    format!(
        r#"<div class="product-card" data-layout="{layout}">
    {image}
    <div class="product-info">
        <h5 class="product-title" title="{title}">{title}</h5>
        {rating}
        {price}
        {selector}
        {action}
    </div>
</div>"#,
        layout = state.layout().as_str(),
        image = render_image(state),
        title = title,
        rating = render_rating(state),
        price = render_price(state),
        selector = render_selector(state),
        action = render_action(state)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::config::CardConfig;
    use crate::image::PLACEHOLDER_IMAGE;

    #[test]
    fn test_image_has_one_shot_handler() {
        let product = Product::new("Tee", 1.0).with_image("https://cdn.example/tee.jpg");
        let state = ProductCardState::new(product, CardConfig::default());
        let html = render_image(&state);
        assert!(html.contains(r#"src="https://cdn.example/tee.jpg""#));
        assert!(html.contains(&format!(
            "onerror=\"this.onerror=null;this.src=&#39;{}&#39;;\"",
            PLACEHOLDER_IMAGE
        )));
    }

    #[test]
    fn test_image_after_fallback_has_no_handler() {
        let product = Product::new("Tee", 1.0).with_image("https://cdn.example/tee.jpg");
        let mut state = ProductCardState::new(product, CardConfig::default());
        state.on_image_error();

        let html = render_image(&state);
        assert!(html.contains(PLACEHOLDER_IMAGE));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_card_escapes_title() {
        let state = ProductCardState::new(
            Product::new("<script>alert(1)</script>", 1.0),
            CardConfig::default(),
        );
        let html = render_card(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"title="&lt;script&gt;alert(1)&lt;/script&gt;""#));
    }
}
