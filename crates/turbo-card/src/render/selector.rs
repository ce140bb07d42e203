//! Variant selector renderer.

use super::escape_html;
use crate::card::ProductCardState;
use crate::config::CardLayout;

/// Render the selector(s) for the card's layout.
pub fn render_selector(state: &ProductCardState) -> String {
    match state.layout() {
        CardLayout::Single => render_label_select(state),
        CardLayout::Matrix => render_matrix(state),
    }
}

fn render_label_select(state: &ProductCardState) -> String {
    let selected = state.selected_label().unwrap_or_default();
    let options = render_options(state.label_options(), selected);
    let disabled = if state.selector_disabled() { " disabled" } else { "" };

    format!(
        r#"<div class="variant-selector">
            <div class="variant-label">Color</div>
            <select class="variant-select" name="variant"{disabled}>{options}</select>
        </div>"#,
        disabled = disabled,
        options = options
    )
}

fn render_matrix(state: &ProductCardState) -> String {
    let sizes = render_options(state.sizes(), state.selected_size().unwrap_or_default());
    let selected_color = state.selected_color();

    let colors: String = state
        .colors()
        .iter()
        .map(|color| {
            let active = selected_color == Some(color.as_str());
            format!(
                r#"<button type="button" class="color-option{active_class}" data-color="{color}" aria-pressed="{pressed}">{color}</button>"#,
                active_class = if active { " active" } else { "" },
                color = escape_html(color),
                pressed = active
            )
        })
        .collect();

    format!(
        r#"<div class="variant-selector variant-selector--matrix">
            <div class="variant-label">Size</div>
            <select class="variant-select" name="size">{sizes}</select>
            <div class="variant-label">Color</div>
            <div class="color-options" role="group">{colors}</div>
        </div>"#,
        sizes = sizes,
        colors = colors
    )
}

fn render_options(values: &[String], selected: &str) -> String {
    values
        .iter()
        .map(|value| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = escape_html(value),
                sel = if value == selected { " selected" } else { "" }
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MatrixVariant, Product};
    use crate::config::CardConfig;

    #[test]
    fn test_label_select_marks_selection() {
        let product = Product::new("Cap", 9.0)
            .with_rating(4.0, 2)
            .with_variant("Black")
            .with_variant("White");
        let mut state = ProductCardState::new(product, CardConfig::single_selector());
        state.select_label("White").unwrap();

        let html = render_selector(&state);
        assert!(html.contains(r#"<option value="Black">Black</option>"#));
        assert!(html.contains(r#"<option value="White" selected>White</option>"#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_matrix_marks_active_color() {
        let product = Product::new("Tee", 20.0)
            .with_variant(MatrixVariant::new("Red", "M", 3))
            .with_variant(MatrixVariant::new("Blue", "L", 0));
        let mut state = ProductCardState::new(product, CardConfig::matrix());
        state.select_color("Blue").unwrap();

        let html = render_selector(&state);
        assert!(html.contains(r#"class="color-option active" data-color="Blue" aria-pressed="true""#));
        assert!(html.contains(r#"class="color-option" data-color="Red" aria-pressed="false""#));
        assert!(html.contains(r#"<option value="M" selected>M</option>"#));
        assert!(html.contains(r#"<option value="L">L</option>"#));
    }

    #[test]
    fn test_option_values_are_escaped() {
        let product = Product::new("Cap", 9.0)
            .with_rating(4.0, 2)
            .with_variant(r#"16" <XL>"#);
        let state = ProductCardState::new(product, CardConfig::single_selector());
        let html = render_selector(&state);
        assert!(html.contains("16&quot; &lt;XL&gt;"));
    }
}
