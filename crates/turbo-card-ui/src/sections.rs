//! Card sections.

use leptos::prelude::*;
use turbo_card::ProductCardState;

#[component]
pub(crate) fn RatingLine(state: RwSignal<ProductCardState>) -> impl IntoView {
    let (rate, count) = state.with_untracked(|s| {
        let product = s.product();
        (product.rating_rate(), product.review_count())
    });

    view! {
        <div class="product-rating">
            <span class="rating-star" aria-hidden="true">"\u{2605}"</span>
            <small class="rating-rate">{rate.to_string()}</small>
            <small class="rating-count">"(" {count.to_string()} " reviews)"</small>
        </div>
    }
}

#[component]
pub(crate) fn PriceBlock(state: RwSignal<ProductCardState>) -> impl IntoView {
    let (current, original) =
        state.with_untracked(|s| (s.price_display(), s.original_price_display()));

    view! {
        <div class="product-price">
            <span class="price-current">{current}</span>
            {original.map(|original| view! { <s class="price-original">{original}</s> })}
        </div>
    }
}

/// Single dropdown over variant labels. Locked while out of stock.
#[component]
pub(crate) fn LabelSelect(state: RwSignal<ProductCardState>) -> impl IntoView {
    let options = state.with_untracked(|s| s.label_options().to_vec());

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            if let Err(e) = s.select_label(&value) {
                tracing::warn!(error = %e, "label selection rejected");
            }
        });
    };

    view! {
        <div class="variant-selector">
            <div class="variant-label">"Color"</div>
            <select
                class="variant-select"
                name="variant"
                prop:value=move || state.with(|s| s.selected_label().unwrap_or_default().to_string())
                disabled=move || state.with(|s| s.selector_disabled())
                on:change=on_change
            >
                {options
                    .into_iter()
                    .map(|label| {
                        let value = label.clone();
                        view! { <option value=value>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

/// Size dropdown plus color toggles.
#[component]
pub(crate) fn MatrixSelect(state: RwSignal<ProductCardState>) -> impl IntoView {
    let (sizes, colors) = state.with_untracked(|s| (s.sizes().to_vec(), s.colors().to_vec()));

    let on_size = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            if let Err(e) = s.select_size(&value) {
                tracing::warn!(error = %e, "size selection rejected");
            }
        });
    };

    let color_buttons = colors
        .into_iter()
        .map(|color| {
            let watched = color.clone();
            let active =
                Memo::new(move |_| state.with(|s| s.selected_color() == Some(watched.as_str())));
            let picked = color.clone();
            let data_color = color.clone();
            let on_click = move |_: leptos::ev::MouseEvent| {
                state.update(|s| {
                    if let Err(e) = s.select_color(&picked) {
                        tracing::warn!(error = %e, "color selection rejected");
                    }
                });
            };

            view! {
                <button
                    type="button"
                    class=move || if active.get() { "color-option active" } else { "color-option" }
                    data-color=data_color
                    aria-pressed=move || active.get().to_string()
                    on:click=on_click
                >
                    {color}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="variant-selector variant-selector--matrix">
            <div class="variant-label">"Size"</div>
            <select
                class="variant-select"
                name="size"
                prop:value=move || state.with(|s| s.selected_size().unwrap_or_default().to_string())
                on:change=on_size
            >
                {sizes
                    .into_iter()
                    .map(|size| {
                        let value = size.clone();
                        view! { <option value=value>{size}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <div class="variant-label">"Color"</div>
            <div class="color-options" role="group">
                {color_buttons}
            </div>
        </div>
    }
}
