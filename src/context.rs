//! Storefront Context
//!
//! Store, API client and config shared via Leptos Context API, plus the
//! actions components trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpPlantApi, PlantApi};
use crate::catalog;
use crate::config::StorefrontConfig;
use crate::loading::LoadState;
use crate::models::{CategoryFilter, Plant};
use crate::store::{self, ShopStateStoreFields, ShopStore};

#[derive(Clone, Copy)]
pub struct ShopContext {
    pub store: ShopStore,
    api: StoredValue<HttpPlantApi>,
    config: StoredValue<StorefrontConfig>,
}

impl ShopContext {
    pub fn new(store: ShopStore, config: StorefrontConfig) -> Self {
        let api = HttpPlantApi::new(config.api_base.clone());
        Self {
            store,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> StorefrontConfig {
        self.config.get_value()
    }

    /// Fetch categories, highlight "All Trees" and load the full plant list
    pub fn load_categories(&self) {
        let store = self.store;
        let api = self.api.get_value();
        store.categories().set(LoadState::Loading);
        store.selected_category().set(CategoryFilter::All);
        let ticket = store::store_begin_plants(&store);
        spawn_local(async move {
            let (categories, plants) = catalog::load_storefront(&api).await;
            store.categories().set(categories);
            if !store::store_finish_plants(&store, ticket, plants) {
                tracing::debug!(ticket, "dropped stale plant list");
            }
        });
    }

    /// Highlight `filter` and reload the grid for it
    pub fn select_category(&self, filter: CategoryFilter) {
        store::store_select_category(&self.store, filter);
        self.load_plants(filter);
    }

    fn load_plants(&self, filter: CategoryFilter) {
        let store = self.store;
        let api = self.api.get_value();
        let ticket = store::store_begin_plants(&store);
        spawn_local(async move {
            let result = catalog::load_plants(&api, filter).await;
            match &result {
                Ok(plants) => tracing::info!(?filter, count = plants.len(), "plants loaded"),
                Err(e) => tracing::warn!(?filter, error = %e, "failed to load plants"),
            }
            if !store::store_finish_plants(&store, ticket, result) {
                tracing::debug!(?filter, ticket, "dropped stale plant list");
            }
        });
    }

    /// Show the detail dialog, then fill it from a single-plant fetch
    pub fn open_detail(&self, plant_id: u32) {
        let store = self.store;
        let api = self.api.get_value();
        let ticket = store::store_open_detail(&store);
        spawn_local(async move {
            let result = api.get_plant(plant_id).await;
            if let Err(e) = &result {
                tracing::warn!(plant_id, error = %e, "failed to load plant detail");
            }
            if !store::store_finish_detail(&store, ticket, result) {
                tracing::debug!(plant_id, ticket, "dropped stale plant detail");
            }
        });
    }

    pub fn close_detail(&self) {
        store::store_close_detail(&self.store);
    }

    pub fn add_to_cart(&self, plant: Plant) {
        tracing::debug!(plant_id = plant.id, "add to cart");
        store::store_add_to_cart(&self.store, plant);
    }

    pub fn remove_from_cart(&self, plant_id: u32) {
        tracing::debug!(plant_id, "remove from cart");
        store::store_remove_from_cart(&self.store, plant_id);
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
