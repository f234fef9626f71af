//! Plant Nursery Storefront App
//!
//! Main application component with three-column layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CartPanel, CategoryList, PlantDetailModal, PlantGrid};
use crate::config::StorefrontConfig;
use crate::context::ShopContext;
use crate::store::ShopState;

#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::from_document();
    tracing::info!(
        api_base = %config.api_base,
        display_cap = config.display_cap,
        "starting storefront"
    );

    let store = Store::new(ShopState::default());
    let ctx = ShopContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Categories first; that also triggers the initial unfiltered plant load
    ctx.load_categories();

    view! {
        <div class="app-layout">
            // Left: Categories
            <CategoryList />

            // Center: Plants
            <main class="main-content">
                <h1>"Choose Your Trees"</h1>
                <PlantGrid />
            </main>

            // Right: Cart
            <CartPanel />

            <PlantDetailModal />
        </div>
    }
}
