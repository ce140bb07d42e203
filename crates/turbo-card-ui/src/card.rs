//! Reactive product card.

use leptos::prelude::*;
use turbo_card::notify::ToastQueue;
use turbo_card::{CardConfig, CardLayout, CartPayload, ProductCardState};
use turbo_card::catalog::Product;

use crate::sections::{LabelSelect, MatrixSelect, PriceBlock, RatingLine};
use crate::toaster::use_toaster;

/// Product card with variant selection and an add-to-cart button.
///
/// Selection lives only as long as the component. Toasts go to the nearest
/// [`Toaster`](crate::Toaster); without one they are dropped.
#[component]
pub fn ProductCard(
    /// Product to show.
    product: Product,
    /// Receives the product with the selected variant merged in.
    #[prop(into)]
    on_add_to_cart: Callback<CartPayload>,
    /// Layout, stock rule and display settings.
    #[prop(optional)]
    config: Option<CardConfig>,
) -> impl IntoView {
    let state = RwSignal::new(ProductCardState::new(product, config.unwrap_or_default()));
    let toaster = use_toaster();

    let (title, layout) = state.with_untracked(|s| (s.product().title.clone(), s.layout()));
    let in_stock = Memo::new(move |_| state.with(|s| s.in_stock()));
    let image_src = move || state.with(|s| s.image().current().to_string());

    let on_image_error = move |_: leptos::ev::ErrorEvent| {
        state.update(|s| {
            s.on_image_error();
        });
    };

    let add_to_cart = move |_: leptos::ev::MouseEvent| {
        let mut added = None;
        state.update(|s| {
            let result = match toaster {
                Some(mut handle) => s.add_to_cart(&mut handle, |payload| added = Some(payload)),
                None => s.add_to_cart(&mut ToastQueue::new(), |payload| added = Some(payload)),
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "add to cart rejected");
            }
        });
        // Run outside the update so the handler may read the card.
        if let Some(payload) = added {
            on_add_to_cart.run(payload);
        }
    };

    let selector = match layout {
        CardLayout::Single => view! { <LabelSelect state=state/> }.into_any(),
        CardLayout::Matrix => view! { <MatrixSelect state=state/> }.into_any(),
    };

    view! {
        <div class="product-card" data-layout=layout.as_str()>
            <img
                src=image_src
                alt=title.clone()
                class="product-image"
                on:error=on_image_error
            />
            <div class="product-info">
                <h5 class="product-title" title=title.clone()>{title.clone()}</h5>
                <RatingLine state=state/>
                <PriceBlock state=state/>
                {selector}
                {move || if in_stock.get() {
                    view! {
                        <button type="button" class="btn-add-to-cart" on:click=add_to_cart>
                            "Add to Cart"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button type="button" class="btn-out-of-stock" disabled=true>
                            "Out of Stock"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
