//! Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiResult;
use crate::cart::Cart;
use crate::catalog::CategoryEntry;
use crate::loading::{LoadState, TrackedLoad};
use crate::models::{CategoryFilter, Plant};

/// Storefront state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Category sidebar rows
    pub categories: LoadState<Vec<CategoryEntry>>,
    /// Highlighted sidebar row, kept apart so a click only restyles rows
    pub selected_category: CategoryFilter,
    /// Plant grid for the highlighted category
    pub plants: TrackedLoad<Vec<Plant>>,
    /// Session cart
    pub cart: Cart,
    /// Whether the detail dialog is open
    pub detail_open: bool,
    /// Plant shown in the detail dialog
    pub detail: TrackedLoad<Plant>,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_to_cart(store: &ShopStore, plant: Plant) {
    store.cart().write().add(plant);
}

pub fn store_remove_from_cart(store: &ShopStore, plant_id: u32) {
    store.cart().write().remove(plant_id);
}

/// Highlight a category. Returns true if the highlight moved.
pub fn store_select_category(store: &ShopStore, filter: CategoryFilter) -> bool {
    if store.selected_category().get_untracked() == filter {
        return false;
    }
    store.selected_category().set(filter);
    true
}

/// Mark the plant grid as loading and return the request ticket
pub fn store_begin_plants(store: &ShopStore) -> u64 {
    store.plants().write().begin()
}

pub fn store_finish_plants(store: &ShopStore, ticket: u64, result: ApiResult<Vec<Plant>>) -> bool {
    store.plants().write().finish(ticket, result)
}

/// Open the detail dialog in its loading state and return the request ticket
pub fn store_open_detail(store: &ShopStore) -> u64 {
    store.detail_open().set(true);
    store.detail().write().begin()
}

pub fn store_finish_detail(store: &ShopStore, ticket: u64, result: ApiResult<Plant>) -> bool {
    store.detail().write().finish(ticket, result)
}

pub fn store_close_detail(store: &ShopStore) {
    store.detail_open().set(false);
}
