//! Cart Panel Component
//!
//! Right column listing cart lines and the running total.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::display::{format_amount, format_price, CURRENCY_SIGN};
use crate::models::CartLine;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let ctx = use_shop();
    let id = line.plant.id;

    view! {
        <div class="cart-line">
            <div>
                <h4 class="cart-line-name">{line.plant.name}</h4>
                <p class="cart-line-price">
                    {format_price(line.plant.price)}
                    <span>{format!(" x {}", line.quantity)}</span>
                </p>
            </div>
            <button class="cart-remove-btn" on:click=move |_| ctx.remove_from_cart(id)>
                "×"
            </button>
        </div>
    }
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_shop_store();

    let lines = move || store.cart().with(|cart| cart.lines().to_vec());
    let total = move || store.cart().with(|cart| cart.total());
    let item_count = move || store.cart().with(|cart| cart.item_count());
    let is_empty = move || store.cart().with(|cart| cart.is_empty());

    view! {
        <aside class="cart-column">
            <h2 class="cart-column-header">
                "Your Cart"
                <span class="cart-count">{move || format!(" ({})", item_count())}</span>
            </h2>
            <Show when=is_empty>
                <p class="cart-empty">"Your cart is empty."</p>
            </Show>
            <div class="cart-lines">
                // Keyed by id and quantity so a repeated add re-renders the row
                <For
                    each=lines
                    key=|line| (line.plant.id, line.quantity)
                    children=move |line| view! { <CartLineRow line=line /> }
                />
            </div>
            <div class="cart-total">
                <span>"Total: "</span>
                {CURRENCY_SIGN}
                <span class="cart-total-amount">{move || format_amount(total())}</span>
            </div>
        </aside>
    }
}
