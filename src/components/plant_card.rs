//! Plant Card Component
//!
//! One product card in the grid.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::display::{format_price, truncate_description};
use crate::models::Plant;

#[component]
pub fn PlantCard(plant: Plant, description_chars: usize) -> impl IntoView {
    let ctx = use_shop();
    let id = plant.id;
    let preview = truncate_description(&plant.description, description_chars);
    let price = format_price(plant.price);
    let on_add = {
        let plant = plant.clone();
        move |_| ctx.add_to_cart(plant.clone())
    };

    view! {
        <div class="plant-card">
            <div class="plant-card-image">
                <img src=plant.image alt=plant.name.clone() />
            </div>
            <div class="plant-card-body">
                <h3 class="plant-card-name" on:click=move |_| ctx.open_detail(id)>
                    {plant.name.clone()}
                </h3>
                <p class="plant-card-description">{preview}</p>
                <div class="plant-card-meta">
                    <span class="category-badge">{plant.category}</span>
                    <span class="plant-card-price">{price}</span>
                </div>
                <button class="add-to-cart-btn" on:click=on_add>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
