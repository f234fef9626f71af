//! Plant Detail Modal Component
//!
//! Native `<dialog>` opened when a card's name is clicked.

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::StatusMessage;
use crate::context::use_shop;
use crate::display::format_price;
use crate::loading::LoadState;
use crate::store::ShopStateStoreFields;

#[component]
pub fn PlantDetailModal() -> impl IntoView {
    let ctx = use_shop();
    let dialog_ref = NodeRef::<Dialog>::new();

    // Keep the native dialog in sync with the store flag
    Effect::new(move |_| {
        let open = ctx.store.detail_open().get();
        let Some(dialog) = dialog_ref.get() else { return };
        if open && !dialog.open() {
            if let Err(e) = dialog.show_modal() {
                tracing::warn!(error = ?e, "failed to open detail dialog");
            }
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let detail = move || ctx.store.detail().with(|load| load.state().clone());

    view! {
        <dialog
            class="plant-modal"
            node_ref=dialog_ref
            // Escape closes the dialog natively; mirror that into the store
            on:close=move |_| ctx.close_detail()
        >
            <div class="plant-modal-content">
                {move || match detail() {
                    LoadState::Loading => view! { <StatusMessage text="Loading..." /> }.into_any(),
                    LoadState::Failed(msg) => view! {
                        <StatusMessage text=format!("Could not load plant: {}", msg) error=true />
                    }.into_any(),
                    LoadState::Ready(plant) => view! {
                        <div class="plant-detail">
                            <h3 class="plant-detail-name">{plant.name.clone()}</h3>
                            <img class="plant-detail-image" src=plant.image alt=plant.name.clone() />
                            <p><b>"Category: "</b>{plant.category}</p>
                            <p><b>"Price: "</b>{format_price(plant.price)}</p>
                            <p><b>"Description: "</b>{plant.description}</p>
                        </div>
                    }.into_any(),
                }}
                <div class="plant-modal-actions">
                    <button class="plant-modal-close" on:click=move |_| ctx.close_detail()>
                        "Close"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
