//! Static HTML rendering for product cards.
//!
//! Markup mirrors the reactive component so server-rendered cards hydrate
//! without layout shift. Every renderer takes the card state and returns a
//! fragment; `render_card` stitches them together.

mod action;
mod card;
mod page;
mod price;
mod rating;
mod selector;

pub use action::render_action;
pub use card::{render_card, render_image};
pub use page::{render_card_page, HeadContent, PageShell, CARD_STYLES};
pub use price::render_price;
pub use rating::render_rating;
pub use selector::render_selector;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape for a single-quoted JS string literal.
pub(crate) fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_js() {
        assert_eq!(escape_js(r"it's a\b"), r"it\'s a\\b");
    }
}
