//! Category Selection
//!
//! Category list and storefront loading behind the sidebar, independent of
//! the DOM.

use crate::api::{ApiResult, PlantApi};
use crate::loading::LoadState;
use crate::models::{Category, CategoryFilter, Plant};

pub const ALL_CATEGORIES_LABEL: &str = "All Trees";

/// One clickable row in the category list
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub filter: CategoryFilter,
    pub label: String,
}

/// Sidebar rows: "All Trees" first, then the API categories in order
pub fn category_entries(categories: Vec<Category>) -> Vec<CategoryEntry> {
    let mut entries = Vec::with_capacity(categories.len() + 1);
    entries.push(CategoryEntry {
        filter: CategoryFilter::All,
        label: ALL_CATEGORIES_LABEL.to_string(),
    });
    entries.extend(categories.into_iter().map(|category| CategoryEntry {
        filter: CategoryFilter::Category(category.id),
        label: category.category_name,
    }));
    entries
}

/// Fetch the plant list for a filter
pub async fn load_plants(api: &impl PlantApi, filter: CategoryFilter) -> ApiResult<Vec<Plant>> {
    match filter {
        CategoryFilter::All => api.list_all_plants().await,
        CategoryFilter::Category(id) => api.list_plants_by_category(id).await,
    }
}

/// First page load: the sidebar entries and the unfiltered plant list.
///
/// The plant list is fetched whether or not the categories came back, so a
/// failed category request never leaves the grid loading.
pub async fn load_storefront(
    api: &impl PlantApi,
) -> (LoadState<Vec<CategoryEntry>>, ApiResult<Vec<Plant>>) {
    let categories = match api.list_categories().await {
        Ok(categories) => {
            tracing::info!(count = categories.len(), "categories loaded");
            LoadState::Ready(category_entries(categories))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load categories");
            LoadState::Failed(e.to_string())
        }
    };
    let plants = load_plants(api, CategoryFilter::All).await;
    (categories, plants)
}
