//! Plant Grid Component
//!
//! Product cards for the highlighted category, capped at the configured
//! display limit.

use leptos::prelude::*;

use crate::components::{PlantCard, StatusMessage};
use crate::context::use_shop;
use crate::display::visible_plants;
use crate::loading::LoadState;
use crate::store::ShopStateStoreFields;

#[component]
pub fn PlantGrid() -> impl IntoView {
    let ctx = use_shop();
    let config = ctx.config();
    let display_cap = config.display_cap;
    let description_chars = config.description_chars;

    let plants = move || ctx.store.plants().with(|load| load.state().clone());

    view! {
        <section class="plant-grid-section">
            {move || match plants() {
                LoadState::Loading => view! { <StatusMessage text="Loading..." /> }.into_any(),
                LoadState::Failed(msg) => view! {
                    <StatusMessage text=format!("Could not load plants: {}", msg) error=true />
                }.into_any(),
                LoadState::Ready(plants) if plants.is_empty() => {
                    view! { <StatusMessage text="No plants found." /> }.into_any()
                }
                LoadState::Ready(plants) => {
                    let shown = visible_plants(&plants, display_cap);
                    view! {
                        <div class="plant-grid">
                            {shown.into_iter().map(|plant| view! {
                                <PlantCard plant=plant description_chars=description_chars />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
