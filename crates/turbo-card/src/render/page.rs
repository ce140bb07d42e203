//! Standalone preview page wrapping rendered cards.

use super::{escape_html, render_card};
use crate::card::ProductCardState;

/// Head content for the page.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document shell around a grid of cards.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub head: HeadContent,
    /// Heading shown above the grid.
    pub heading: Option<String>,
}

impl PageShell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            heading: None,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Render a full document around the given card fragments.
    pub fn render(&self, cards: &[String]) -> String {
        let heading = self
            .heading
            .as_ref()
            .map(|h| format!("<h1>{}</h1>\n", escape_html(h)))
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n<main class=\"card-grid-page\">\n{heading}<div class=\"products\">\n{cards}\n</div>\n</main>\n</body>\n</html>",
            head = self.head.render(),
            heading = heading,
            cards = cards.join("\n")
        )
    }
}

/// Render a complete preview document for the given cards.
pub fn render_card_page(title: &str, states: &[ProductCardState]) -> String {
    let cards: Vec<String> = states.iter().map(render_card).collect();
    PageShell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(CARD_STYLES),
    )
    .with_heading(title)
    .render(&cards)
}

/// Styles for the card markup.
pub const CARD_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; }
.card-grid-page { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.products { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }

.product-card { background: white; border: 1px solid #e5e5e5; border-radius: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); overflow: hidden; display: flex; flex-direction: column; transition: all 0.3s ease; }
.product-card:hover { box-shadow: 0 6px 18px rgba(0,0,0,0.12); }
.product-image { width: 100%; height: 200px; object-fit: contain; padding: 1rem; }
.product-info { display: flex; flex-direction: column; flex: 1; padding: 1rem; }
.product-title { font-size: 1.1rem; margin: 0 0 0.5rem 0; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }

.product-rating { display: flex; align-items: center; gap: 0.25rem; margin-bottom: 0.5rem; color: #666; }
.rating-star { color: #ffc107; font-size: 0.9rem; }
.rating-count { margin-left: 0.5rem; }

.product-price { margin-bottom: 1rem; }
.price-current { font-weight: bold; font-size: 1.25rem; }
.price-original { color: #888; margin-left: 0.5rem; }

.variant-selector { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem 1.5rem; margin-bottom: 1rem; }
.variant-label { font-weight: bold; }
.variant-select { max-width: 200px; padding: 0.25rem 0.5rem; border-radius: 6px; }
.color-options { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.color-option { border: 1px solid #333; background: white; color: #333; padding: 0.25rem 0.75rem; border-radius: 6px; cursor: pointer; }
.color-option.active { background: #333; color: white; }

.btn-add-to-cart, .btn-out-of-stock { width: 100%; margin-top: auto; padding: 0.6rem 1rem; border: none; border-radius: 6px; font-size: 1rem; }
.btn-add-to-cart { background: #212529; color: white; cursor: pointer; }
.btn-out-of-stock { background: #6c757d; color: white; opacity: 0.65; cursor: not-allowed; }

.toaster { position: fixed; top: 1rem; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; gap: 0.5rem; z-index: 10000; }
.toast { background: white; color: #333; padding: 0.75rem 1rem; border-radius: 8px; box-shadow: 0 3px 10px rgba(0,0,0,0.15); }
.toast-success::before { content: "\2713"; color: #4caf50; margin-right: 0.5rem; }
"#;
