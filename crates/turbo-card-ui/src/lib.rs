//! Leptos components for the TurboCommerce product card.
//!
//! The reactive card keeps a `ProductCardState` in a signal and uses the same
//! class names as `turbo_card::render`, so `CARD_STYLES` applies to both.
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use turbo_card::prelude::*;
//! use turbo_card_ui::{provide_toaster, ProductCard, Toaster};
//!
//! #[component]
//! fn Shelf(products: Vec<Product>) -> impl IntoView {
//!     provide_toaster();
//!     let (cart, set_cart) = signal(Vec::<CartPayload>::new());
//!
//!     view! {
//!         <Toaster/>
//!         <div class="products">
//!             {products.into_iter().map(|p| view! {
//!                 <ProductCard
//!                     product=p
//!                     on_add_to_cart=move |item| set_cart.update(|c| c.push(item))
//!                 />
//!             }).collect::<Vec<_>>()}
//!         </div>
//!     }
//! }
//! ```

mod card;
mod sections;
mod toaster;

pub use card::ProductCard;
pub use toaster::{provide_toaster, use_toaster, Toaster, ToasterHandle};
